use owo_colors::OwoColorize;
use serde::Deserialize;
use std::process::{Command, Stdio};
use thiserror::Error;

const REQUIREMENTS: &str = include_str!("../requirements.yaml");
const CLOUD_SERVICE_GROUP: &str = "cloud-service";

#[derive(Debug, Error)]
pub enum RequirementsError {
    #[error("Failed to parse the requirements list: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type RequirementsResult<T> = Result<T, RequirementsError>;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    pub command: String,
    pub link: String,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RequirementStatus {
    pub requirement: Requirement,
    pub exists: bool,
}

pub fn parse_requirements(yaml: &str) -> RequirementsResult<Vec<Requirement>> {
    Ok(serde_yaml::from_str(yaml)?)
}

fn is_installed(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

pub fn check_requirements() -> RequirementsResult<Vec<RequirementStatus>> {
    Ok(parse_requirements(REQUIREMENTS)?
        .into_iter()
        .map(|requirement| {
            let exists = is_installed(&requirement.command);
            RequirementStatus { requirement, exists }
        })
        .collect())
}

fn cloud_service_present(statuses: &[RequirementStatus]) -> bool {
    let cloud_services: Vec<&RequirementStatus> = statuses
        .iter()
        .filter(|status| status.requirement.group.as_deref() == Some(CLOUD_SERVICE_GROUP))
        .collect();

    if cloud_services.iter().any(|status| status.exists) {
        return true;
    }

    println!(
        "{}",
        "No cloud service detected. Please download one of the following:".yellow()
    );
    for status in &cloud_services {
        println!("{} => {}", status.requirement.command, status.requirement.link);
    }

    false
}

pub fn all_present(statuses: &[RequirementStatus]) -> bool {
    let mut all = true;

    for status in statuses {
        if !status.exists && status.requirement.group.is_none() {
            println!("{}", "Missing requirement detected:".yellow());
            println!("{}", status.requirement.command);
            println!("{}", status.requirement.link);
            all = false;
        }
    }

    all && cloud_service_present(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(command: &str, group: Option<&str>, exists: bool) -> RequirementStatus {
        RequirementStatus {
            requirement: Requirement {
                command: command.to_owned(),
                link: format!("https://example.com/{command}"),
                group: group.map(str::to_owned),
            },
            exists,
        }
    }

    #[test]
    fn parses_the_bundled_requirements() {
        let requirements = parse_requirements(REQUIREMENTS).unwrap();

        assert!(requirements.iter().any(|r| r.command == "git" && r.group.is_none()));
        assert!(
            requirements
                .iter()
                .any(|r| r.command == "gcloud" && r.group.as_deref() == Some("cloud-service"))
        );
    }

    #[test]
    fn missing_ungrouped_requirement_fails_the_check() {
        let statuses = vec![
            status("git", None, false),
            status("gcloud", Some("cloud-service"), true),
        ];

        assert!(!all_present(&statuses));
    }

    #[test]
    fn one_present_cloud_service_satisfies_the_group() {
        let statuses = vec![
            status("git", None, true),
            status("gcloud", Some("cloud-service"), true),
            status("aws", Some("cloud-service"), false),
        ];

        assert!(all_present(&statuses));
    }

    #[test]
    fn no_present_cloud_service_fails_the_check() {
        let statuses = vec![
            status("git", None, true),
            status("gcloud", Some("cloud-service"), false),
        ];

        assert!(!all_present(&statuses));
    }
}
