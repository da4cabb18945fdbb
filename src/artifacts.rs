//! Generated-artifact paths and post-run cleanup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Synthesized translation unit.
pub const SOURCE_FILE: &str = "tmp_toast.c";
/// Combined child-process output, shared by both stages.
pub const LOG_FILE: &str = "logs";
/// Compiled test suite.
pub const EXECUTABLE: &str = "tmp_toast";

/// The exactly-three paths a run produces.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub source: PathBuf,
    pub log: PathBuf,
    pub executable: PathBuf,
}

#[derive(Debug)]
pub struct CleanupReport {
    pub removed: usize,
    pub expected: usize,
    pub failures: Vec<(PathBuf, io::Error)>,
}

impl CleanupReport {
    pub fn is_complete(&self) -> bool {
        self.removed == self.expected
    }
}

impl Artifacts {
    pub fn in_dir(base: &Path) -> Self {
        Self {
            source: base.join(SOURCE_FILE),
            log: base.join(LOG_FILE),
            executable: base.join(EXECUTABLE),
        }
    }

    /// Delete generated files, each attempt independent of the others. The
    /// executable is only expected when the build stage produced one.
    /// Failures are reported, never fatal.
    pub fn cleanup(&self, include_executable: bool) -> CleanupReport {
        let mut targets = vec![&self.source, &self.log];
        if include_executable {
            targets.push(&self.executable);
        }

        let expected = targets.len();
        let mut removed = 0;
        let mut failures = Vec::new();

        for path in targets {
            match fs::remove_file(path) {
                Ok(()) => removed += 1,
                Err(source) => failures.push((path.clone(), source)),
            }
        }

        for (path, source) in &failures {
            warn!("failed to delete '{}': {}", path.display(), source);
        }
        info!("removed {removed} of {expected} generated artifacts");

        CleanupReport {
            removed,
            expected,
            failures,
        }
    }
}
