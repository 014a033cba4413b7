//! External print command invocation.
//!
//! The print mechanism is an opaque executable: the rendered ticket text
//! is piped to its stdin and a zero exit status means success. One
//! synchronous attempt per call, bounded by a configured timeout. Retry
//! policy, if anyone ever wants one, belongs to the caller.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("print command not found: {0}")]
    NotFound(String),
    #[error("print command failed: {0}")]
    ExecutionFailed(String),
    #[error("print I/O error: {0}")]
    Io(#[from] io::Error),
}

pub struct PrintInvoker {
    script_path: PathBuf,
    timeout: Duration,
}

impl PrintInvoker {
    pub fn new(script_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            script_path: script_path.into(),
            timeout,
        }
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Whether the configured print executable exists. Checked by the
    /// request handler before a ticket number is consumed.
    pub fn script_exists(&self) -> bool {
        self.script_path.is_file()
    }

    /// Run the print command, feeding `text` to its stdin, and wait for
    /// it to exit within the configured timeout.
    pub async fn invoke(&self, text: &str) -> Result<(), PrintError> {
        debug!(
            script = %self.script_path.display(),
            bytes = text.len(),
            "Invoking print command"
        );

        let mut child = Command::new(&self.script_path)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    PrintError::NotFound(self.script_path.display().to_string())
                }
                _ => PrintError::Io(e),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| PrintError::ExecutionFailed("stdin pipe unavailable".to_string()))?;
        stdin.write_all(text.as_bytes()).await?;
        // Close stdin so the command sees EOF.
        drop(stdin);

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => status?,
            Err(_) => {
                child.kill().await.ok();
                return Err(PrintError::ExecutionFailed(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        if !status.success() {
            return Err(PrintError::ExecutionFailed(format!("exited with {status}")));
        }

        Ok(())
    }
}
