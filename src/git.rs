use std::path::Path;
use std::process::Command;
use std::io;
use thiserror::Error;

pub type GitResult<T> = Result<T, GitError>;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git executable not found. Install git to continue.")]
    GitNotInstalled,
    #[error("git clone failed with code {code:?}: {stderr}")]
    CloneFailure { code: Option<i32>, stderr: String },
    #[error("Failed to execute git: {0}")]
    Io(io::Error),
}

impl From<io::Error> for GitError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => GitError::GitNotInstalled,
            _ => GitError::Io(err),
        }
    }
}

pub fn clone(url: &str, dest: &Path) -> GitResult<()> {
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(dest)
        .output()?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    Err(GitError::CloneFailure {
        code: output.status.code(),
        stderr,
    })
}
