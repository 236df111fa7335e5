//! Thin interface to the native C compiler.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcError {
    /// The compiler ran but exited non-zero. Carries whatever it wrote to both
    /// streams; the caller decides how to report it. Never retried here.
    #[error("C compiler exited with status {status}")]
    ExternalToolFailure {
        status: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error("failed to launch C compiler: {0}")]
    Launch(#[from] std::io::Error),
}

pub struct Cc {
    command: String,
    target: PathBuf,
}

impl Cc {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            target: PathBuf::from("a.out"),
        }
    }

    pub fn set_target(mut self, target: PathBuf) -> Self {
        self.target = target;
        self
    }

    /// Compiles `files` into the configured target binary. Both of the child's
    /// output streams are drained on their own threads so neither can block the
    /// child on a full pipe.
    pub fn run(&self, files: &[PathBuf]) -> Result<(), CcError> {
        let mut child = Command::new(&self.command)
            .arg("-o")
            .arg(&self.target)
            .args(files)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let stdout_grabber = thread::spawn(move || grab(stdout));
        let stderr_grabber = thread::spawn(move || grab(stderr));

        let status = child.wait()?;
        let stdout = stdout_grabber.join().unwrap_or_default();
        let stderr = stderr_grabber.join().unwrap_or_default();

        if status.success() {
            Ok(())
        } else {
            Err(CcError::ExternalToolFailure {
                status: status.code().unwrap_or(-1),
                stdout,
                stderr,
            })
        }
    }
}

/// Reads a stream to end-of-file, keeping whatever arrived before any error.
fn grab<R: Read>(stream: Option<R>) -> Vec<u8> {
    let mut buffer = Vec::new();
    if let Some(mut stream) = stream {
        let _ = stream.read_to_end(&mut buffer);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_compiler_is_a_launch_failure() {
        let cc = Cc::new("verc-test-no-such-compiler");
        let err = cc.run(&[PathBuf::from("x.c")]).unwrap_err();
        assert!(matches!(err, CcError::Launch(_)));
    }

    #[test]
    fn failing_command_captures_its_streams() {
        // `false` exits non-zero without reading its arguments.
        let cc = Cc::new("false");
        let err = cc.run(&[]).unwrap_err();
        match err {
            CcError::ExternalToolFailure { status, .. } => assert_ne!(status, 0),
            other => panic!("expected tool failure, got {:?}", other),
        }
    }

    #[test]
    fn nonexistent_input_file_is_reported_not_retried() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.c");
        let cc = Cc::new("cc").set_target(dir.path().join("out"));
        match cc.run(&[missing]) {
            Err(CcError::ExternalToolFailure { status, stderr, .. }) => {
                assert_ne!(status, 0);
                assert!(!stderr.is_empty());
            }
            Err(CcError::Launch(_)) => {
                // No C compiler on this machine; launch failure is the other
                // legitimate outcome.
            }
            Ok(()) => panic!("compiling a missing file cannot succeed"),
        }
    }
}
