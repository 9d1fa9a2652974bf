use checkwords_common::config::Config;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "checkwords")]
#[command(about = "Spells out dollar amounts the way they are written on a cheque.")]
#[command(version)]
pub struct CommandLine {
    /// Amounts to convert, e.g. 2523.04
    #[arg(
        value_name = "AMOUNT",
        required_unless_present = "stdin",
        allow_negative_numbers = true
    )]
    pub amounts: Vec<String>,

    /// Also read amounts from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Exit with status 1 when any amount is rejected
    #[arg(long)]
    pub strict: bool,

    /// Render an all-zero dollar part as nothing, so 0.00 prints " dollars"
    #[arg(long)]
    pub legacy_zero: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            strict: self.strict,
            zero_words: !self.legacy_zero,
            verbosity: self.verbose,
            quiet: self.quiet,
        }
    }
}
