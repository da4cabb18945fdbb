use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("compilation failed ({status})")]
    BuildFailed { status: ExitStatus },
}

impl ProcessError {
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    pub fn build_failed(status: ExitStatus) -> Self {
        Self::BuildFailed { status }
    }
}
