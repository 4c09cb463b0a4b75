use super::error::GcloudResult;
use super::run::gcloud_lines;

pub fn list_regions() -> GcloudResult<Vec<String>> {
    gcloud_lines(["app", "regions", "list", "--format=value(region)"])
}
