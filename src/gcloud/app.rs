use super::error::{GcloudError, GcloudResult};
use super::run::{gcloud_streamed, gcloud_unit};
use std::path::Path;

pub fn create_app(region: &str) -> GcloudResult<()> {
    match gcloud_unit(["app", "create", "--region", region]) {
        Err(GcloudError::CommandFailure { stderr, .. })
            if stderr.contains("already contains an App Engine application") =>
        {
            Ok(())
        }
        other => other,
    }
}

pub fn deploy(dir: &Path) -> GcloudResult<()> {
    gcloud_streamed(["app", "deploy", "--quiet"], dir)
}
