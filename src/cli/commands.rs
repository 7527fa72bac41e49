use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vocab-context",
    about = "Vocabulary store with embedding-based related-word search"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP tool server
    Serve {
        /// Interface to bind (default: MCP_SERVER_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: MCP_SERVER_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load a word file and print the words most related to a text
    Related {
        /// JSON array of {english, japanese, status?}
        words: PathBuf,
        /// Text to find related words for
        text: String,
        #[arg(long, default_value_t = crate::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_limit_defaults_to_search_limit() {
        let cli = Cli::try_parse_from(["vocab-context", "related", "words.json", "move"]).unwrap();
        match cli.command {
            Commands::Related { limit, .. } => assert_eq!(limit, crate::DEFAULT_SEARCH_LIMIT),
            _ => panic!("expected related command"),
        }
    }
}
