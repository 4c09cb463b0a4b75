use crate::envfile::{self, Config};
use crate::prompt::{env_questions, select, style};
use crate::{catalog, config, gcloud, git, requirements, sipgate};
use inquire::InquireError;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

const PROJECT_KEY: &str = "GOOGLE_PROJECT_NAME";
const REGION_KEY: &str = "GOOGLE_PROJECT_REGION";
const REPO_KEY: &str = "EXAMPLE_REPO_NAME";
const TOKEN_ID_KEY: &str = "SIPGATE_TOKEN_ID";
const TOKEN_KEY: &str = "SIPGATE_TOKEN";
const WEBHOOK_KEY: &str = "SIPGATE_WEBHOOK_SERVER_ADDRESS";

#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Requirements(#[from] requirements::RequirementsError),
    #[error("Missing requirements, aborting.")]
    MissingRequirements,
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
    #[error(transparent)]
    Gcloud(#[from] gcloud::GcloudError),
    #[error(transparent)]
    Git(#[from] git::GitError),
    #[error(transparent)]
    Sipgate(#[from] sipgate::SipgateError),
    #[error(transparent)]
    Prompt(#[from] InquireError),
    #[error("Failed to write {path}: {source}")]
    WriteEnv { path: PathBuf, source: io::Error },
}

type WizardResult<T> = Result<T, WizardError>;

pub struct RunOptions {
    pub config: Option<Option<PathBuf>>,
    pub generate_config: bool,
    pub repository: Option<String>,
}

enum ExampleSource {
    Remote { repository: String },
    Local { path: PathBuf },
}

pub fn handle(options: RunOptions) {
    match flow(options) {
        Ok(()) => {}
        Err(WizardError::Prompt(
            InquireError::OperationCanceled | InquireError::OperationInterrupted,
        )) => println!("Aborted. Nothing has been written."),
        Err(err) => eprintln!("{err}"),
    }
}

fn flow(options: RunOptions) -> WizardResult<()> {
    let statuses = requirements::check_requirements()?;
    if !requirements::all_present(&statuses) {
        return Err(WizardError::MissingRequirements);
    }

    let config_path = resolve_config_path(&options);
    let persisted = resolve_config(&options, &config_path)?;

    let project = select_gcp_project(&persisted)?;
    let region = select_gcp_region(&persisted)?;

    let (source, env_lines) = resolve_example(&options, &persisted)?;

    let questions = envfile::extract_questions(&env_lines);
    let outcome = envfile::overlay(questions, &persisted);
    report_prefilled(&outcome.prefilled);
    let answers = env_questions::ask(&outcome.remaining)?;
    let env_values = envfile::merge(outcome.prefilled, answers);

    let project_dir = match &source {
        ExampleSource::Remote { repository } => {
            let dest = PathBuf::from(repository);
            println!("Cloning {repository}...");
            git::clone(&catalog::repository_url(repository), &dest)?;
            dest
        }
        ExampleSource::Local { path } => path.clone(),
    };

    let env_path = project_dir.join(".env");
    fs::write(&env_path, envfile::build_env(&env_values)).map_err(|source| {
        WizardError::WriteEnv {
            path: env_path.clone(),
            source,
        }
    })?;
    println!("Wrote {}", env_path.display());

    if select::confirm_deploy()? {
        gcloud::app::create_app(&region)?;
        println!("Deploying to App Engine. This can take a few minutes...");
        gcloud::app::deploy(&project_dir)?;
        println!("{}", style::success("Deployed successfully."));

        register_webhook(&project, &env_values)?;
    }

    let mut to_save = envfile::merge(persisted, env_values);
    to_save.insert(PROJECT_KEY.to_owned(), project);
    to_save.insert(REGION_KEY.to_owned(), region);
    if let ExampleSource::Remote { repository } = source {
        to_save.insert(REPO_KEY.to_owned(), repository);
    }
    config::save(&config_path, &to_save)?;
    println!("Saved config to {}", config_path.display());

    Ok(())
}

fn resolve_config_path(options: &RunOptions) -> PathBuf {
    match &options.config {
        Some(Some(path)) => path.clone(),
        _ => PathBuf::from(config::DEFAULT_CONFIG_PATH),
    }
}

fn resolve_config(options: &RunOptions, path: &Path) -> WizardResult<Config> {
    if options.generate_config {
        return generate_config(path);
    }

    if options.config.is_none() {
        return Ok(Config::new());
    }

    if config::exists(path) {
        let loaded = config::load(path)?;
        println!("Loaded config from {} successfully", path.display());
        return Ok(loaded);
    }

    if !select::confirm_generate_config()? {
        return Err(WizardError::Prompt(InquireError::OperationCanceled));
    }

    generate_config(path)
}

fn generate_config(path: &Path) -> WizardResult<Config> {
    let lines = config::example_lines(Path::new(config::EXAMPLE_CONFIG_PATH))?;
    let questions = envfile::extract_questions(&lines);
    let answers = env_questions::ask(&questions)?;

    config::save(path, &answers)?;
    println!("Saved config to {}", path.display());

    Ok(answers)
}

fn log_used_config(key: &str, value: &str) {
    let shown = if envfile::is_secret(key) { "*********" } else { value };
    println!("Using {key}={shown} from config file.");
}

fn report_prefilled(prefilled: &Config) {
    for (key, value) in prefilled {
        log_used_config(key, value);
    }
}

fn select_gcp_project(persisted: &Config) -> WizardResult<String> {
    println!("Fetching Google Cloud projects...");
    let projects = gcloud::projects::list_projects()?;

    let project = match persisted.get(PROJECT_KEY) {
        Some(configured) if projects.contains(configured) => {
            log_used_config(PROJECT_KEY, configured);
            configured.clone()
        }
        Some(configured) => {
            println!(
                "{}",
                style::warn(&format!("Invalid {PROJECT_KEY}={configured} in config."))
            );
            select::gcp_project(projects)?
        }
        None => select::gcp_project(projects)?,
    };

    gcloud::projects::set_project(&project)?;
    Ok(project)
}

fn select_gcp_region(persisted: &Config) -> WizardResult<String> {
    println!("Fetching Google Cloud regions...");
    let regions = gcloud::regions::list_regions()?;

    match persisted.get(REGION_KEY) {
        Some(configured) if regions.contains(configured) => {
            log_used_config(REGION_KEY, configured);
            Ok(configured.clone())
        }
        Some(configured) => {
            println!(
                "{}",
                style::warn(&format!("Invalid {REGION_KEY}={configured} in config."))
            );
            Ok(select::gcp_region(regions)?)
        }
        None => Ok(select::gcp_region(regions)?),
    }
}

fn resolve_example(
    options: &RunOptions,
    persisted: &Config,
) -> WizardResult<(ExampleSource, Vec<String>)> {
    if let Some(repository) = &options.repository {
        let projects = fetch_catalog()?;
        let repository = if projects.iter().any(|p| p.repository == *repository) {
            repository.clone()
        } else {
            println!(
                "{}",
                style::warn(&format!("Unknown sipgate.io example '{repository}'."))
            );
            select::example(&projects)?
        };

        let lines = fetch_env(&repository)?;
        return Ok((ExampleSource::Remote { repository }, lines));
    }

    match select::repo_source()? {
        select::RepoSource::SipgateIo => {
            let projects = fetch_catalog()?;

            let repository = match persisted.get(REPO_KEY) {
                Some(configured) if projects.iter().any(|p| p.repository == *configured) => {
                    log_used_config(REPO_KEY, configured);
                    configured.clone()
                }
                Some(configured) => {
                    println!(
                        "{}",
                        style::warn(&format!("Invalid {REPO_KEY}={configured} in config."))
                    );
                    select::example(&projects)?
                }
                None => select::example(&projects)?,
            };

            let lines = fetch_env(&repository)?;
            Ok((ExampleSource::Remote { repository }, lines))
        }
        select::RepoSource::Local => {
            let path = PathBuf::from(select::local_repo_path()?);
            let lines = catalog::local_env_for(&path)?;
            Ok((ExampleSource::Local { path }, lines))
        }
    }
}

fn fetch_catalog() -> WizardResult<Vec<catalog::ProjectData>> {
    let spinner = style::spinner("Fetching sipgate.io examples...");
    let projects = catalog::fetch_projects();
    spinner.finish_and_clear();

    Ok(projects?)
}

fn fetch_env(repository: &str) -> WizardResult<Vec<String>> {
    let spinner = style::spinner(&format!("Fetching .env.example for {repository}..."));
    let lines = catalog::fetch_env_for(repository);
    spinner.finish_and_clear();

    Ok(lines?)
}

fn register_webhook(project: &str, env_values: &Config) -> WizardResult<()> {
    let token_id = env_values.get(TOKEN_ID_KEY).filter(|v| !v.is_empty());
    let token = env_values.get(TOKEN_KEY).filter(|v| !v.is_empty());

    let (Some(token_id), Some(token)) = (token_id, token) else {
        return Ok(());
    };

    let webhook_url = env_values
        .get(WEBHOOK_KEY)
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("https://{project}.appspot.com"));

    if select::confirm_webhook(&webhook_url)? {
        sipgate::register_incoming_url(token_id, token, &webhook_url)?;
        println!("{}", style::success("Webhook URL registered with sipgate."));
    }

    Ok(())
}
