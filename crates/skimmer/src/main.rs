use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skimmer_common::{logger, AppConfig};
use skimmer_extract::HttpPageFetcher;
use skimmer_llm::InferenceClient;
use skimmer_server::{RequestOrchestrator, WorkflowOutcome};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "skimmer")]
#[command(about = "Skimmer - summarize articles and pasted text into bullet points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a URL or a piece of text once and print the bullet points
    Summarize {
        /// Article URL or literal text
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // AppConfig::from_env() also loads .env, this makes the project root file win
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        Some(Commands::Summarize { input }) => summarize_once(&input).await,
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;

    // Override with CLI arguments
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Skimmer starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.model_id);
    tracing::info!("  Max input: {} chars", config.max_input_chars);

    println!("Server listening on http://{}", config.server_bind_address());

    skimmer_server::start_server(config).await?;
    Ok(())
}

async fn summarize_once(input: &str) -> Result<()> {
    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level)?;

    let fetcher = Arc::new(HttpPageFetcher::new(config.fetch_timeout())?);
    let backend = Arc::new(InferenceClient::from_config(&config)?);
    let orchestrator = RequestOrchestrator::from_config(&config, fetcher, backend);

    let outcome = orchestrator.run(input).await;
    print_outcome(&outcome);

    match outcome.error {
        Some(e) => Err(e).context("summarization failed"),
        None => Ok(()),
    }
}

fn print_outcome(outcome: &WorkflowOutcome) {
    let payload = &outcome.payload;

    for message in &payload.messages {
        eprintln!("[{}] {}", message.category.as_str(), message.text);
    }

    if payload.bullet_points.is_empty() {
        return;
    }

    println!("{}", payload.source_info);
    for point in &payload.bullet_points {
        println!("  - {}", point);
    }
}
