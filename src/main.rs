use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vocab_context::cli::commands::{Cli, Commands};
use vocab_context::cli::word_file::read_word_file;
use vocab_context::config::Config;
use vocab_context::http;
use vocab_context::VocabularyStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let store = VocabularyStore::from_config(&config);
    match cmd {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            tracing::info!(model = store.embedding_model(), "starting vocabulary context server");
            http::serve(Arc::new(store), &host, port).await?;
        }
        Commands::Related { words, text, limit } => {
            let words = read_word_file(&words)?;
            let report = store.add_words_batch(words).await;
            for failed in &report.failed {
                eprintln!("Skipped '{}': {}", failed.word, failed.error);
            }
            let related = store.search_similar_words(&text, limit).await?;
            println!("{}", serde_json::to_string_pretty(&related)?);
        }
    }
    Ok(())
}

