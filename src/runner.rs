//! Two-stage build/execute pipeline with combined log capture.
//!
//! Both stages share one log artifact and one shape: truncate the log, spawn
//! the child with stdout and stderr redirected into it, block until it
//! exits, read the log back. The run stage only starts once the build stage
//! has succeeded, and the log is re-truncated in between so build output
//! cannot bleed into run output.
//!
//! No timeouts are enforced on either child; a hung compiler or hung test
//! binary blocks the pipeline indefinitely.

use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::artifacts::Artifacts;
use crate::cli::RunConfig;
use crate::discovery::scan_directory;
use crate::error::{IoError, ProcessError, Result};
use crate::synth::{synthesize, write_unit};

/// External C compiler.
const CC: &str = "gcc";

/// Outcome of one child-process stage: the child's exit status and
/// everything it wrote to the shared log.
#[derive(Debug)]
pub struct StageReport {
    pub status: ExitStatus,
    pub log: String,
}

impl StageReport {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Spawn `command` with combined stdout/stderr redirected into `log_path`
/// (created fresh, truncated), block until it exits, and read the log back.
fn run_stage(command: &mut Command, log_path: &Path) -> Result<StageReport> {
    let log = File::create(log_path).map_err(|source| IoError::write_error(log_path, source))?;
    let stderr_log = log
        .try_clone()
        .map_err(|source| IoError::write_error(log_path, source))?;

    let program = command.get_program().to_string_lossy().into_owned();
    let status = command
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(stderr_log))
        .status()
        .map_err(|source| ProcessError::spawn_failed(program, source))?;

    let text =
        fs::read_to_string(log_path).map_err(|source| IoError::read_error(log_path, source))?;

    Ok(StageReport { status, log: text })
}

/// Build stage: compile the synthesized unit into the suite executable.
pub fn compile(artifacts: &Artifacts) -> Result<StageReport> {
    info!("compiling test suite '{}'", artifacts.source.display());
    let mut command = Command::new(CC);
    command
        .arg("-o")
        .arg(&artifacts.executable)
        .arg(&artifacts.source);
    run_stage(&mut command, &artifacts.log)
}

/// Run stage: execute the freshly built suite. The child's exit status is
/// deliberately not interpreted; pass/fail accounting belongs to the harness
/// and reaches the user through the captured log text.
pub fn execute(artifacts: &Artifacts) -> Result<StageReport> {
    info!("running test suite");
    let mut command = Command::new(&artifacts.executable);
    run_stage(&mut command, &artifacts.log)
}

/// Full pipeline: discover, synthesize, build, execute, clean up. Each
/// stage's captured log is echoed verbatim; nothing is swallowed, even on
/// failure.
pub fn run(config: &RunConfig) -> Result<()> {
    let discovery = scan_directory(&config.dir)?;

    let unit = synthesize(discovery.cases.as_slice(), discovery.defines.as_deref())?;
    let artifacts = Artifacts::in_dir(Path::new("."));
    write_unit(&artifacts.source, &unit)?;
    debug!("wrote synthesized unit to '{}'", artifacts.source.display());

    let build = compile(&artifacts)?;
    print!("{}", build.log);
    if !build.success() {
        if config.keep {
            info!("keeping generated artifacts");
        } else {
            artifacts.cleanup(false);
        }
        return Err(ProcessError::build_failed(build.status).into());
    }
    info!("compilation successful");

    let report = execute(&artifacts)?;
    print!("{}", report.log);

    if config.keep {
        info!("keeping generated artifacts");
    } else {
        artifacts.cleanup(true);
    }
    Ok(())
}
