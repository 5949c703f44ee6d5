use std::process::ExitCode;

use clap::Parser;
use missing_text::cli::{Arguments, ExitStatus, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
