//! Module for launching the measured external program and timing single
//! invocations.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Error, launch_error};


/// What to do with the measured program's stdout/stderr while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutput {
    /// Route both streams to the null device, keeping the harness's own
    /// stdout free for samples.
    Discard,
    /// Leave both streams attached to the harness's streams.
    Inherit,
}

/// Launches the external program under measurement and times each invocation.
#[derive(Debug)]
pub struct TimedInvoker {
    program: PathBuf,
    subcommand: String,
    child_output: ChildOutput,
}

impl TimedInvoker {
    pub fn new(
        program: impl Into<PathBuf>,
        subcommand: impl Into<String>,
        child_output: ChildOutput,
    ) -> Self {
        Self {
            program: program.into(),
            subcommand: subcommand.into(),
            child_output,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the program once and returns the wall-clock time between launch
    /// and completion.
    ///
    /// A non-zero exit status of the measured program is not an error: the
    /// harness measures duration, not correctness, so the elapsed time is
    /// returned either way. Only a failure to launch the process at all
    /// aborts with [`Error::Launch`].
    pub fn invoke_once(&self) -> Result<Duration, Error> {
        let mut command = Command::new(&self.program);
        command.arg(&self.subcommand);
        if let ChildOutput::Discard = self.child_output {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let launched = Instant::now();
        let status = command
            .status()
            .map_err(|e| launch_error(&self.program, e))?;
        let elapsed = launched.elapsed();

        if !status.success() {
            tracing::debug!(%status, "measured program reported failure");
        }
        Ok(elapsed)
    }
}
