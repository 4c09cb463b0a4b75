use crate::catalog;
use crate::prompt::{select, style, tabs::calculate_tabs};

pub fn handle() {
    let spinner = style::spinner("Fetching sipgate.io examples...");
    let projects = catalog::fetch_projects();
    spinner.finish_and_clear();

    let projects = match projects {
        Ok(projects) => projects,
        Err(err) => {
            eprintln!("Failed to fetch the example catalog: {err}");
            return;
        }
    };

    let repositories: Vec<&str> = projects.iter().map(|p| p.repository.as_str()).collect();
    let tabs = calculate_tabs(&repositories);

    for (project, tab_offset) in projects.iter().zip(tabs) {
        println!("{}", select::example_row(project, tab_offset));
    }
}
