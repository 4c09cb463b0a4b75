use super::style;
use super::tabs::calculate_tabs;
use crate::catalog::ProjectData;
use inquire::error::InquireResult;
use inquire::{Confirm, Select, Text};
use std::fmt;

const DESCRIPTION_LIMIT: usize = 101;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepoSource {
    SipgateIo,
    Local,
}

impl fmt::Display for RepoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoSource::SipgateIo => write!(f, "sipgate.io Repo"),
            RepoSource::Local => write!(f, "local Repo"),
        }
    }
}

pub fn repo_source() -> InquireResult<RepoSource> {
    Select::new(
        "Choose between sipgate.io Repository or Local Repository!",
        vec![RepoSource::SipgateIo, RepoSource::Local],
    )
    .prompt()
}

struct ExampleRow {
    repository: String,
    display: String,
}

impl fmt::Display for ExampleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

fn describe(description: &str) -> String {
    if description == "null" {
        return String::new();
    }

    let truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    let ellipsis = if description.chars().count() > DESCRIPTION_LIMIT {
        "..."
    } else {
        ""
    };

    format!("{truncated}{ellipsis}")
}

pub fn example_row(project: &ProjectData, tab_offset: usize) -> String {
    format!(
        "{}{}{}",
        project.repository,
        "\t".repeat(tab_offset),
        style::dim(&format!("- {}", describe(&project.description))),
    )
}

pub fn example(projects: &[ProjectData]) -> InquireResult<String> {
    let repositories: Vec<&str> = projects.iter().map(|p| p.repository.as_str()).collect();
    let tabs = calculate_tabs(&repositories);

    let rows: Vec<ExampleRow> = projects
        .iter()
        .zip(tabs)
        .map(|(project, tab_offset)| ExampleRow {
            repository: project.repository.clone(),
            display: example_row(project, tab_offset),
        })
        .collect();

    let selected = Select::new("Choose a sipgate.io example:", rows).prompt()?;
    Ok(selected.repository)
}

pub fn gcp_project(projects: Vec<String>) -> InquireResult<String> {
    Select::new("Choose a GCP project for this example:", projects).prompt()
}

pub fn gcp_region(regions: Vec<String>) -> InquireResult<String> {
    Select::new("Choose a region for your GCP App Engine application:", regions).prompt()
}

pub fn local_repo_path() -> InquireResult<String> {
    Text::new("Path to your local repository:").prompt()
}

pub fn confirm_generate_config() -> InquireResult<bool> {
    Confirm::new("Could not find an existing config. Do you want to interactively generate a new one?")
        .with_default(true)
        .prompt()
}

pub fn confirm_deploy() -> InquireResult<bool> {
    Confirm::new("Deploy the example to Google Cloud App Engine now?")
        .with_default(true)
        .prompt()
}

pub fn confirm_webhook(url: &str) -> InquireResult<bool> {
    Confirm::new(&format!(
        "Register {url} as your sipgate.io incoming webhook URL?"
    ))
    .with_default(true)
    .prompt()
}
