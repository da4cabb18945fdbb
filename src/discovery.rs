//! Directory discovery: enumerate the scan root once, classify entries, and
//! drive extraction per matching file.
//!
//! One bad file never aborts the scan: read failures and malformed test
//! files are reported and skipped. Entries come back in whatever order the
//! platform yields them; the scanner does not sort, so case order across
//! files can differ between filesystems.

use std::fs;
use std::path::Path;

use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use crate::buffer::Buffer;
use crate::error::{Error, IoError, Result};
use crate::extract::{extract_cases, Case};

/// File injected verbatim into the synthesized unit, if present.
pub const DEFINES_FILE: &str = "defines.c";

/// Substring that marks a file as a test file.
pub const TEST_FILE_MARKER: &str = ".test.";

#[derive(Debug, Default)]
pub struct Discovery {
    pub cases: Buffer<Case>,
    pub defines: Option<String>,
}

pub fn is_test_file(name: &str) -> bool {
    name.contains(TEST_FILE_MARKER)
}

/// Scan `dir` one level deep, extracting cases from every test file and
/// capturing the defines block if present.
pub fn scan_directory(dir: &Path) -> Result<Discovery> {
    if !dir.is_dir() {
        return Err(IoError::directory_not_found(dir).into());
    }
    info!("reading test directory '{}'", dir.display());

    let mut discovery = Discovery::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                warn!("skipping unreadable entry in '{}': {}", dir.display(), source);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();

        if name == DEFINES_FILE {
            match fs::read_to_string(entry.path()) {
                Ok(block) if discovery.defines.is_none() => {
                    debug!("captured defines block from '{}'", entry.path().display());
                    discovery.defines = Some(block);
                }
                Ok(_) => {
                    warn!("ignoring additional defines file '{}'", entry.path().display());
                }
                Err(source) => {
                    warn!("{}", IoError::read_error(entry.path(), source));
                }
            }
        } else if is_test_file(&name) {
            info!("parsing '{}'", entry.path().display());
            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(source) => {
                    warn!("{}", IoError::read_error(entry.path(), source));
                    continue;
                }
            };
            match extract_cases(&name, &bytes) {
                Ok(cases) => {
                    debug!("extracted {} case(s) from '{}'", cases.len(), name);
                    discovery.cases.extend_from_slice(cases.as_slice())?;
                }
                Err(Error::Extract(source)) => {
                    warn!(
                        "skipping malformed test file '{}': {}",
                        entry.path().display(),
                        source
                    );
                }
                Err(fatal) => return Err(fatal),
            }
        } else {
            trace!("ignoring '{}'", name);
        }
    }

    info!("discovered {} test case(s)", discovery.cases.len());
    Ok(discovery)
}
