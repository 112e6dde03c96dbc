mod cmd_ask;
mod cmd_config;
mod cmd_export;
mod cmd_history;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "skald",
    version,
    about = "Chain-of-thought question answering with transcript export"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a question and print the model's reasoning and answer
    Ask {
        /// The question to answer
        question: String,
        /// Model name (overrides config)
        #[arg(long)]
        model: Option<String>,
        /// Endpoint base URL (overrides config)
        #[arg(long)]
        base_url: Option<String>,
        /// Skip reasoning elicitation and ask for the answer directly
        #[arg(long)]
        no_reasoning: bool,
        /// Print the transcript of the request after answering
        #[arg(long)]
        show_prompt: bool,
        /// Save the last request transcript to this file
        #[arg(long)]
        debug_file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent interactions from a recorded session
    History {
        /// Session ID (defaults to the most recent session)
        #[arg(long)]
        session: Option<String>,
        /// Maximum number of interactions to show
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Output as JSON lines (one interaction per line)
        #[arg(long)]
        json: bool,
    },
    /// Export the most recent interaction of a session to a text file
    Export {
        /// Destination file
        dest: PathBuf,
        /// Session ID (defaults to the most recent session)
        #[arg(long)]
        session: Option<String>,
    },
    /// Manage config values
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("SKALD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = skald_store::store_root();

    match cli.cmd {
        Command::Ask {
            question,
            model,
            base_url,
            no_reasoning,
            show_prompt,
            debug_file,
            json,
        } => cmd_ask::execute(
            &root,
            cmd_ask::AskParams {
                question: &question,
                model: model.as_deref(),
                base_url: base_url.as_deref(),
                no_reasoning,
                show_prompt,
                debug_file: debug_file.as_deref(),
                json,
            },
        ),
        Command::History {
            session,
            limit,
            json,
        } => cmd_history::execute(&root, session.as_deref(), limit, json),
        Command::Export { dest, session } => {
            cmd_export::execute(&root, &dest, session.as_deref())
        }
        Command::Config { cmd } => cmd_config::run(cmd, &root),
    }
}
