use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devdocs-mcp")]
#[command(about = "Search and read locally extracted DevDocs documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server over stdio
    Serve {
        #[arg(long, env = "DEVDOCS_DOCS_DIR")]
        docs_dir: Option<PathBuf>,
    },
    /// Search documentation entries
    Search {
        query: String,
        #[arg(short = 's', long = "doc-set")]
        doc_set: Option<String>,
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        #[arg(long, env = "DEVDOCS_DOCS_DIR")]
        docs_dir: Option<PathBuf>,
    },
    /// Read one documentation file as Markdown
    Read {
        path: String,
        #[arg(long, env = "DEVDOCS_DOCS_DIR")]
        docs_dir: Option<PathBuf>,
    },
    /// List available documentation sets
    ListSets {
        #[arg(long, env = "DEVDOCS_DOCS_DIR")]
        docs_dir: Option<PathBuf>,
    },
}
