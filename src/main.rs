use std::process::ExitCode;

use clap::Parser;
use tracksplit::{cli::Cli, runtime};

fn main() -> ExitCode {
    runtime::run(Cli::parse())
}
