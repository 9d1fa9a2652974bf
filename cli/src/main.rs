mod commands;
mod input;
mod terminal;

use std::io;
use std::process::ExitCode;

use checkwords_core::Humanizer;
use checkwords_core::batch::{self, BatchSummary};
use commands::CommandLine;
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    let mut amounts = commands.amounts;
    if commands.stdin {
        let piped = input::read_amounts(io::stdin().lock())?;
        debug!("Read {} amounts from stdin", piped.len());
        amounts.extend(piped);
    }

    let humanizer = Humanizer::new(&cfg);
    let conversions = batch::humanize_all(&humanizer, &amounts);

    print::conversions(&mut io::stdout().lock(), &conversions)?;

    let summary = BatchSummary::from_conversions(&conversions);
    if cfg.strict && summary.rejected > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
