use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("instance is missing a `url`")]
    MissingUrl,
    #[error("instance is missing a `name`")]
    MissingName,
    #[error("failed to read check config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse check config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum CheckError {
    /// lighthouse exited with a non-zero code. stdout is never parsed in this case.
    #[error("lighthouse exited with code {exit_code}: {stderr}")]
    SubprocessFailure {
        stdout: String,
        stderr: String,
        exit_code: i32,
    },

    /// lighthouse exited cleanly but its output is not the expected report.
    #[error("unexpected lighthouse response (exit code {exit_code})")]
    UnexpectedResponseShape {
        stdout: String,
        stderr: String,
        exit_code: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to start lighthouse")]
    Spawn(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CheckError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CheckError::SubprocessFailure { exit_code, .. }
            | CheckError::UnexpectedResponseShape { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
