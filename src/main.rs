use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::error::ErrorKind;
use clap::Parser;

use toaster::cli::Args;
use toaster::logging;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage errors: print usage, exit 1.
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    logging::init();

    if let Err(err) = try_main(args) {
        eprintln!("[toaster] error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_main(args: Args) -> Result<()> {
    args.validate().context("invalid arguments")?;
    let config = args.into_config();
    toaster::run(&config).context("test run failed")?;
    Ok(())
}
