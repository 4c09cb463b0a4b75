use crate::envfile;
use serde::Deserialize;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

const CATALOG_URL: &str = "https://raw.githubusercontent.com/sipgate-io/sipgateio-static-files/main/sipgateio-cli-projects-lock.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("Failed to parse the project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No .env.example found in '{0}'. Create one, or look inside the sipgate.io example repos for a template.")]
    SourceNotFound(String),
    #[error("Failed to read local .env.example: {0}")]
    Io(#[from] io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectData {
    pub repository: String,
    pub description: String,
}

fn fetch_text(url: &str) -> CatalogResult<String> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| CatalogError::Fetch {
            url: url.to_owned(),
            source,
        })
}

pub fn fetch_projects() -> CatalogResult<Vec<ProjectData>> {
    let payload = fetch_text(CATALOG_URL)?;
    Ok(serde_json::from_str(&payload)?)
}

pub fn fetch_env_for(repository: &str) -> CatalogResult<Vec<String>> {
    let url = format!("https://raw.githubusercontent.com/sipgate-io/{repository}/HEAD/.env.example");
    Ok(envfile::read_lines(&fetch_text(&url)?))
}

pub fn local_env_for(path: &Path) -> CatalogResult<Vec<String>> {
    let env_example = path.join(".env.example");

    if !env_example.exists() {
        return Err(CatalogError::SourceNotFound(path.display().to_string()));
    }

    Ok(envfile::read_lines(&fs::read_to_string(env_example)?))
}

pub fn repository_url(repository: &str) -> String {
    format!("https://github.com/sipgate-io/{repository}.git")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_catalog_entries() {
        let payload = r#"[
            {"repository": "sipgateio-incomingcall-node", "description": "Example on how to use the sipgate.io library"},
            {"repository": "io-labs-2fa-service", "description": "null"}
        ]"#;

        let projects: Vec<ProjectData> = serde_json::from_str(payload).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].repository, "sipgateio-incomingcall-node");
        assert_eq!(projects[1].description, "null");
    }

    #[test]
    fn missing_local_env_example_is_source_not_found() {
        let dir = tempdir().unwrap();

        let err = local_env_for(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::SourceNotFound(_)));
    }

    #[test]
    fn local_env_example_is_read_as_trimmed_lines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".env.example"), "# token\nSIPGATE_TOKEN=\n\n").unwrap();

        assert_eq!(
            local_env_for(dir.path()).unwrap(),
            vec!["# token", "SIPGATE_TOKEN="]
        );
    }

    #[test]
    fn repository_urls_point_at_the_sipgate_io_org() {
        assert_eq!(
            repository_url("sipgateio-incomingcall-node"),
            "https://github.com/sipgate-io/sipgateio-incomingcall-node.git"
        );
    }
}
