mod ai;
mod app;
mod config;
mod domain;
mod infrastructure;
mod ingest;
mod nlp;
mod tasks;
mod validation;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use infrastructure::{directories, logging};

/// Classify emails as PRODUTIVO/IMPRODUTIVO and draft automatic replies
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Classify `.txt` files and/or inline text and print the JSON report
    Process {
        /// Inline email text
        #[arg(short, long)]
        text: Option<String>,

        files: Vec<PathBuf>,
    },
    /// Run the built-in validation set and print accuracy metrics
    Validate,
    /// Print the most frequent stems of a text
    Keywords {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        text: String,
    },
}

impl From<CliCommand> for app::Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Process { text, files } => app::Command::Process { files, text },
            CliCommand::Validate => app::Command::Validate,
            CliCommand::Keywords { count, text } => app::Command::Keywords { text, count },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::AutoEmailApp::initialize(config, paths)?;
    app.run(cli.command.into()).await
}
