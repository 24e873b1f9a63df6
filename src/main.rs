use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskprompt::cli;
use taskprompt::cli::generate::GenerateOptions;

#[derive(Parser)]
#[command(name = "taskprompt", version)]
#[command(about = "Turn a short coding task into a detailed prompt for AI coding assistants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an optimized prompt for a coding task
    Generate {
        /// Task description, e.g. "a REST API for products with Node.js and MongoDB"
        task: String,

        /// Path to config file (defaults to ./taskprompt.toml or ~/.config/taskprompt/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override LLM provider (openai, openai-compatible, anthropic)
        #[arg(long)]
        provider: Option<String>,

        /// Override LLM model (e.g., "openai/gpt-4o")
        #[arg(long)]
        model: Option<String>,

        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Skip the completion API and return the template prompt
        #[arg(long)]
        offline: bool,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a task is classified and the template prompt it produces
    Classify {
        /// Task description
        task: String,

        /// Path to config file; only the task length limit is used
        #[arg(long)]
        config: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            task,
            config,
            provider,
            model,
            base_url,
            offline,
            dry_run,
            json,
        } => {
            cli::generate::run(
                task,
                GenerateOptions {
                    config_path: config,
                    provider_override: provider,
                    model_override: model,
                    base_url_override: base_url,
                    offline,
                    dry_run,
                    json,
                },
            )
            .await?;
        }
        Commands::Classify { task, config, json } => {
            cli::classify::run(task, config, json)?;
        }
    }

    Ok(())
}
