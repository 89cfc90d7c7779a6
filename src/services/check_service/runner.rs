use log::debug;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::models::config::DEFAULT_LIGHTHOUSE_PATH;

// Arguments passed after the url. The quotes around --headless are part of the argument.
pub const LIGHTHOUSE_ARGS: [&str; 4] = ["--output", "json", "--quiet", "--chrome-flags='--headless'"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs one audit of `url` and hands back what the tool printed.
pub trait AuditRunner {
    fn run(&self, url: &str) -> impl Future<Output = io::Result<CommandOutput>> + Send;
}

/// Spawns the lighthouse executable.
///
/// The child is killed if the returned future is dropped before it exits, so a
/// host-side timeout never leaves a browser running.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self, url: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(url)
            .args(LIGHTHOUSE_ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHTHOUSE_PATH)
    }
}

impl AuditRunner for ProcessRunner {
    async fn run(&self, url: &str) -> io::Result<CommandOutput> {
        debug!("running {} for {}", self.program.display(), url);
        let child = self.command(url).spawn()?;
        let output = child.wait_with_output().await?;

        // killed by a signal
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(
            "{} exited with {} ({} bytes of output)",
            self.program.display(),
            exit_code,
            output.stdout.len()
        );

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_url_then_fixed_arguments() {
        let output = ProcessRunner::new("echo").run("https://x.test").await.unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(
            output.stdout.trim_end(),
            "https://x.test --output json --quiet --chrome-flags='--headless'"
        );
    }

    #[tokio::test]
    async fn reports_non_zero_exit() {
        let output = ProcessRunner::new("false").run("https://x.test").await.unwrap();
        assert!(!output.success());
        assert_eq!(output.stdout, "");
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let err = ProcessRunner::new("/nonexistent/lighthouse")
            .run("https://x.test")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
