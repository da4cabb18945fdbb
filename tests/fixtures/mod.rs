use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Seed a scratch run directory with the harness header the generated unit
/// compiles against.
pub fn install_harness(dir: &Path) {
    fs::copy(fixture_path("toast.h"), dir.join("toast.h")).expect("copy toast.h fixture");
}
