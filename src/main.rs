mod catalog;
mod cmd;
mod config;
mod envfile;
mod gcloud;
mod git;
mod prompt;
mod requirements;
mod sipgate;

use clap::{Args, Parser, Subcommand};
use cmd::run::RunOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sio-gd",
    version,
    about = "interactive deployer for sipgate.io examples on Google Cloud",
    long_about = "Walks you through deploying a sipgate.io example as a Google Cloud App Engine service: project selection, environment setup, cloning, deployment and webhook registration."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Hands in a config file based on the given example
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    config: Option<Option<PathBuf>>,

    /// Fill in the given example interactively and generate config.cfg
    #[arg(short, long)]
    generate_config: bool,
}

impl RunArgs {
    fn into_options(self, repository: Option<String>) -> RunOptions {
        RunOptions {
            config: self.config,
            generate_config: self.generate_config,
            repository,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive deployment flow
    Run(RunArgs),
    /// Initialize the example <repository> as a Google Cloud App Engine service
    Example {
        repository: String,

        #[command(flatten)]
        args: RunArgs,
    },
    /// List all available sipgate.io examples
    Examples,
    /// Initialize sipgate.io and Google Cloud accounts
    InitAccount,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => cmd::run::handle(cli.run.into_options(None)),
        Some(Command::Run(args)) => cmd::run::handle(args.into_options(None)),
        Some(Command::Example { repository, args }) => {
            cmd::run::handle(args.into_options(Some(repository)))
        }
        Some(Command::Examples) => cmd::examples::handle(),
        Some(Command::InitAccount) => cmd::init_account::handle(),
    }
}
