//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sweep limit argument rejected before any step ran
    #[error("invalid sweep limit {input:?}: {reason}")]
    InvalidLimit { input: String, reason: String },

    /// The fixture slot could not be (over)written. Fatal: the timed step
    /// depends on the fixture existing.
    #[error("failed to write fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The measured program could not be launched at all (missing binary,
    /// permission denied). Fatal: a missing dependency invalidates the
    /// entire benchmark.
    #[error("failed to launch {}: {source}", program.display())]
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },

    /// A produced sample could not be written to the report sink
    #[error("failed to report sample: {0}")]
    Report(#[from] std::io::Error),
}

pub(crate) fn invalid_limit_error(input: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::InvalidLimit {
        input: input.into(),
        reason: reason.into(),
    }
}

pub(crate) fn fixture_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Fixture {
        path: path.into(),
        source,
    }
}

pub(crate) fn launch_error(program: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Launch {
        program: program.into(),
        source,
    }
}
