use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use vectorbridge_common::{logger, AppConfig};
use vectorbridge_embedding::OpenAiClient;
use vectorbridge_mcp::McpServer;
use vectorbridge_store::ChromaClient;
use vectorbridge_tools::ToolExecutor;

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
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "vectorbridge")]
#[command(about = "VectorBridge - embedding and vector search tools over MCP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server on stdio
    Serve {
        /// Chroma collection name
        #[arg(long)]
        collection: Option<String>,

        /// Embedding model name
        #[arg(long)]
        model: Option<String>,
    },
}

/// Build the tool executor and run the stdio server until stdin closes
async fn serve(config: AppConfig) -> Result<()> {
    let embedder = Arc::new(OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
    )?);
    let store = Arc::new(ChromaClient::new(config.chroma_url.clone())?);

    let executor = ToolExecutor::new(embedder, store, config.embed_model, config.collection);

    let server = McpServer::new(executor);
    server.run_stdio().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { collection, model }) => {
            // Override with CLI arguments
            if let Some(collection) = &collection {
                std::env::set_var("CHROMA_COLLECTION", collection);
            }
            if let Some(model) = &model {
                std::env::set_var("OPENAI_EMBED_MODEL", model);
            }

            // Missing credential fails startup here, before any IO
            let config = AppConfig::from_env()?;

            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("VectorBridge starting...");
            tracing::info!("  Embedding model: {}", config.embed_model);
            tracing::info!("  Chroma: {}", config.chroma_url);
            tracing::info!("  Collection: {}", config.collection);

            serve(config).await?;
        }
        None => {
            // Default: start server with env configuration
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("VectorBridge starting with default configuration...");

            serve(config).await?;
        }
    }

    Ok(())
}
