use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::StyleOracle;
use crate::error::{GuardError, Result};

pub const DEFAULT_COMMAND: &str = "clang-format";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs `<command> [args...] -style=<style> <path>` and returns its stdout.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl ClangFormat {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Extra arguments placed before the style flag.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self, path: &Path, style: &str) -> Result<Child> {
        Command::new(&self.command)
            .args(&self.args)
            .arg(format!("-style={style}"))
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| GuardError::OracleUnavailable {
                command: self.command.clone(),
                source,
            })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            // A read error leaves whatever arrived before it.
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

impl StyleOracle for ClangFormat {
    fn format(&self, path: &Path, style: &str) -> Result<String> {
        debug!(command = %self.command, path = %path.display(), "running style oracle");
        let mut child = self.spawn(path, style)?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(GuardError::OracleTimeout {
                    path: path.to_path_buf(),
                    timeout: self.timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if !status.success() {
            let detail = String::from_utf8_lossy(&stderr).trim().to_string();
            return Err(GuardError::OracleFailed {
                path: path.to_path_buf(),
                message: if detail.is_empty() {
                    status.to_string()
                } else {
                    format!("{status}: {detail}")
                },
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

#[cfg(test)]
#[path = "clang_format_tests.rs"]
mod tests;
