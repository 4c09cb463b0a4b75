use super::error::GcloudResult;
use super::run::{gcloud_lines, gcloud_unit};

pub fn list_projects() -> GcloudResult<Vec<String>> {
    gcloud_lines(["projects", "list", "--format=value(projectId)"])
}

pub fn set_project(project: &str) -> GcloudResult<()> {
    gcloud_unit(["config", "set", "project", project])
}
