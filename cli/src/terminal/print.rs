use std::io::{self, Write};

use checkwords_core::Conversion;

/// Writes one line per conversion, in order. Rejected inputs print the
/// diagnostic text like any other result.
pub fn conversions<W: Write>(out: &mut W, conversions: &[Conversion]) -> io::Result<()> {
    for conversion in conversions {
        writeln!(out, "{}", conversion.output)?;
    }
    out.flush()
}
