use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{IoError, Result};

/// Default directory scanned for test files.
pub const DEFAULT_TEST_DIR: &str = "tests";

#[derive(Parser, Debug)]
#[command(name = "toaster")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Test runner for toast.h - discovers test cases, builds them into one suite, runs it",
    long_about = None
)]
pub struct Args {
    /// Directory scanned for *.test.* files
    #[arg(short = 'd', long = "dir", value_name = "PATH", default_value = DEFAULT_TEST_DIR)]
    pub dir: PathBuf,

    /// Keep the generated source, log, and executable after the run
    #[arg(short = 'k', long = "keep")]
    pub keep: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Run configuration, read once at startup and passed explicitly to every
/// component that needs it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dir: PathBuf,
    pub keep: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(IoError::directory_not_found(&self.dir).into());
        }
        Ok(())
    }

    pub fn into_config(self) -> RunConfig {
        RunConfig {
            dir: self.dir,
            keep: self.keep,
        }
    }
}
