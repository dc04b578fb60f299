use anyhow::Context;
use clap::Parser;
use devdocs_mcp::cli::{Cli, Commands};
use devdocs_mcp::config::resolve_docs_dir;
use devdocs_mcp::server::DocsServer;
use devdocs_mcp::store::DocStore;
use devdocs_mcp::tools::list_sets::handle_list_sets;
use devdocs_mcp::tools::read::{ReadDocRequest, handle_read};
use devdocs_mcp::tools::search::{SearchDocsRequest, handle_search};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    devdocs_mcp::tracing::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { docs_dir } => {
            let docs_dir = resolve_docs_dir(docs_dir);
            tracing::info!("Starting devdocs-mcp server over {}", docs_dir.display());

            let store = Arc::new(DocStore::new(docs_dir));
            let server = DocsServer::new(store);
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
        Commands::Search {
            query,
            doc_set,
            limit,
            docs_dir,
        } => {
            let store = DocStore::new(resolve_docs_dir(docs_dir));
            let request = SearchDocsRequest {
                query,
                doc_set,
                limit: Some(limit),
            };
            let output = handle_search(&store, request)
                .await
                .map_err(anyhow::Error::msg)
                .context("search failed")?;
            println!("{output}");
        }
        Commands::Read { path, docs_dir } => {
            let store = DocStore::new(resolve_docs_dir(docs_dir));
            let output = handle_read(&store, ReadDocRequest { path })
                .await
                .map_err(anyhow::Error::msg)
                .context("read failed")?;
            println!("{output}");
        }
        Commands::ListSets { docs_dir } => {
            let store = DocStore::new(resolve_docs_dir(docs_dir));
            let output = handle_list_sets(&store)
                .await
                .map_err(anyhow::Error::msg)
                .context("listing doc sets failed")?;
            println!("{output}");
        }
    }

    Ok(())
}
