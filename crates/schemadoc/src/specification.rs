use crate::{config::DocumentConfig, endpoints::EndpointRegistrar, schema::SchemaDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI version written to every document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Media type under which response schemas are attached
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Path → lower-cased HTTP method → operation
pub type Paths = BTreeMap<String, BTreeMap<String, Operation>>;

/// Minimal OpenAPI 3.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI specification version
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Server URLs
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub servers: Vec<Server>,

    /// API paths and operations, created on first registration
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub paths: Option<Paths>,
}

/// API metadata information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API description
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// API version
    pub version: String,
}

/// Server entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub url: String,

    /// Server description; the key keeps its historical spelling on the wire
    #[serde(rename = "desciption", skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

/// HTTP operation (GET, POST, etc.)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Short summary
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub summary: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Responses by status code
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub responses: BTreeMap<u16, Response>,
}

/// Response specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    /// Description
    #[serde(default)]
    pub description: String,

    /// Content by media type
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub content: BTreeMap<String, MediaType>,
}

/// Media type specification
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schema: Option<SchemaDescriptor>,
}

impl OpenApiDocument {
    /// Create a new document with minimal info
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.to_string(),
                description: None,
                version: version.to_string(),
            },
            servers: Vec::new(),
            paths: None,
        }
    }

    /// Create a document from configuration
    pub fn from_config(config: &DocumentConfig) -> Self {
        let mut document = Self::new(&config.title, &config.version);
        document.info.description = config.description.clone();
        document.servers = config
            .servers
            .iter()
            .map(|server| Server {
                url: server.url.clone(),
                description: server.description.clone().unwrap_or_default(),
            })
            .collect();
        document
    }

    /// Set the API description
    pub fn with_description(mut self, description: &str) -> Self {
        self.info.description = Some(description.to_string());
        self
    }

    /// Add a server entry
    pub fn add_server(&mut self, url: &str, description: Option<&str>) -> &mut Self {
        self.servers.push(Server {
            url: url.to_string(),
            description: description.unwrap_or_default().to_string(),
        });
        self
    }

    /// Register an endpoint, creating any missing path/method nodes.
    ///
    /// Registering the same method and path again returns a registrar over
    /// the existing operation.
    pub fn register_endpoint(&mut self, method: &str, path: &str) -> EndpointRegistrar<'_> {
        let method = method.to_lowercase();
        tracing::debug!(%method, path, "registering endpoint");

        let operation = self
            .paths
            .get_or_insert_with(Paths::new)
            .entry(path.to_string())
            .or_default()
            .entry(method)
            .or_default();

        EndpointRegistrar::new(operation)
    }

    /// Look up a registered operation
    pub fn operation(&self, method: &str, path: &str) -> Option<&Operation> {
        self.paths
            .as_ref()?
            .get(path)?
            .get(&method.to_lowercase())
    }
}
