//! MCP server implementation.

use crate::store::DocStore;
use crate::tools::list_sets::handle_list_sets;
use crate::tools::read::{ReadDocRequest, handle_read};
use crate::tools::search::{SearchDocsRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for DevDocs documentation queries.
#[derive(Clone)]
pub struct DocsServer {
    /// Shared engine state (index cache, search engine, resolver)
    store: Arc<DocStore>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("store", &self.store)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    /// Create a new server over the given store.
    pub fn new(store: Arc<DocStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared store.
    pub fn store(&self) -> &Arc<DocStore> {
        &self.store
    }

    #[tool(
        description = "Search for documentation entries by fuzzy matching entry names and paths. Optionally scoped to one documentation set. Related variants of a matched topic (fragments, sections) are returned together.",
        input_schema = inline_schema_for_type::<SearchDocsRequest>()
    )]
    async fn search_docs(
        &self,
        Parameters(request): Parameters<SearchDocsRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.store, request).await
    }

    #[tool(
        description = "Read a specific documentation file and return it as Markdown. If the exact path does not exist, the closest matching path is used and noted in the response.",
        input_schema = inline_schema_for_type::<ReadDocRequest>()
    )]
    async fn read_doc(
        &self,
        Parameters(request): Parameters<ReadDocRequest>,
    ) -> std::result::Result<String, String> {
        handle_read(&self.store, request).await
    }

    #[tool(description = "List all available documentation sets with their entry counts.")]
    async fn list_doc_sets(&self) -> std::result::Result<String, String> {
        handle_list_sets(&self.store).await
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build());
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "devdocs-mcp: search and read locally extracted DevDocs documentation. \
             Use list_doc_sets to discover available sets, search_docs to find \
             entries, and read_doc to fetch a page as Markdown."
                .to_string(),
        );
        info
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline definitions instead of $ref patterns, and marks Option fields
/// nullable so MCP Inspector renders them as optional inputs.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
