use std::io;
use thiserror::Error;

pub type GcloudResult<T> = Result<T, GcloudError>;

#[derive(Debug, Error)]
pub enum GcloudError {
    #[error("Google Cloud CLI (gcloud) executable not found. Install the Cloud SDK to continue.")]
    GcloudNotInstalled,
    #[error("Google Cloud CLI returned that you are not logged in. Run `gcloud auth login`.")]
    NotLoggedIn,
    #[error("Google Cloud CLI command failed with code {code:?}: {stderr}")]
    CommandFailure { code: Option<i32>, stderr: String },
    #[error("Failed to execute Google Cloud CLI: {0}")]
    Io(#[from] io::Error),
}
