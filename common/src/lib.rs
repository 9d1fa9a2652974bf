//! # Checkwords Common
//!
//! Types shared between the conversion engine and the command line front end.
//!
//! * **[`money`]**: the validated monetary amount model.
//! * **[`error`]**: the typed conversion failures.
//! * **[`config`]**: runtime switches assembled by the CLI.

pub mod config;
pub mod error;
pub mod money;
