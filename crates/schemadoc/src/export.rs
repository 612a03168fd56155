/*!
Export functionality for OpenAPI documents.

Documents render to compact JSON, pretty JSON or YAML. Map keys come out in
sorted order, so the same document always produces the same text.
*/

use crate::{error::OpenApiResult, specification::OpenApiDocument};

impl OpenApiDocument {
    /// Render the document as compact JSON
    pub fn to_json(&self) -> OpenApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the document as indented JSON
    pub fn to_json_pretty(&self) -> OpenApiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the document as YAML
    pub fn to_yaml(&self) -> OpenApiResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse a document from JSON
    pub fn from_json(json: &str) -> OpenApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
