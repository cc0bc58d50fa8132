//! agent CLI: chat with the agent service from the terminal. Config from env
//! and optional CLI args; falls back to local tools when the backend is down.

use std::sync::Arc;
use std::time::Duration;

use agent_client::{AgentService, ClientConfig, HttpRemoteAgent};
use agent_core::{init_tracing, Envelope};
use anyhow::Result;
use clap::{Parser, Subcommand};
use fallback_agent::MockAgent;
use memory_store::InMemoryStore;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "agent")]
#[command(about = "Agent CLI: chat, query", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat loop (empty line exits). Backend URL can override AGENT_BACKEND_URL.
    Chat {
        #[arg(short, long)]
        backend_url: Option<String>,
        /// Skip the remote backend and answer with local tools only.
        #[arg(long)]
        local: bool,
    },
    /// Answer a single prompt and print the envelope JSON.
    Query {
        prompt: String,
        #[arg(short, long)]
        backend_url: Option<String>,
        /// Skip the remote backend and answer with local tools only.
        #[arg(long)]
        local: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { backend_url, local } => {
            let service = build_service(backend_url, local)?;
            run_chat(service).await
        }
        Commands::Query {
            prompt,
            backend_url,
            local,
        } => {
            let service = build_service(backend_url, local)?;
            let envelope = service.respond(&prompt).await;
            println!("{}", render(&envelope)?);
            Ok(())
        }
    }
}

/// Builds the service from config: remote-with-fallback, or local-only with `--local`.
fn build_service(backend_url: Option<String>, local: bool) -> Result<AgentService> {
    let config = ClientConfig::load(backend_url)?;
    config.validate()?;
    init_tracing(&config.log_file)?;

    let store = Arc::new(InMemoryStore::new());
    let fallback = MockAgent::new(store);

    if local {
        info!("step: running local-only, remote backend disabled");
        return Ok(AgentService::local_only(fallback));
    }

    info!(backend_url = %config.backend_url, "step: remote backend configured");
    let remote = HttpRemoteAgent::new(
        &config.backend_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;
    Ok(AgentService::new(Arc::new(remote), fallback))
}

/// Reads prompts line by line from stdin until an empty line or EOF.
async fn run_chat(service: AgentService) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(b"Chat with the agent. Try: \"What is 10 plus 5?\" or \"Remember my cat's name is Fluffy\". Empty line exits.\n")
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let prompt = line.trim();
        if prompt.is_empty() {
            break;
        }

        let envelope = service.respond(prompt).await;
        let text = render(&envelope)?;
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }

    Ok(())
}

fn render(envelope: &Envelope) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}
