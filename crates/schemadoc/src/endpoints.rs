/*!
Endpoint registration handles.

An [`EndpointRegistrar`] is handed out by
[`OpenApiDocument::register_endpoint`](crate::OpenApiDocument::register_endpoint)
and borrows a single operation of the document for as long as it lives, so
every change made through it lands directly in the document.
*/

use crate::{
    schema::SchemaDescriptor,
    specification::{MediaType, Operation, Response, JSON_MEDIA_TYPE},
};
use std::collections::BTreeMap;

/// Handle over one (path, method) operation of a document
#[derive(Debug)]
pub struct EndpointRegistrar<'a> {
    operation: &'a mut Operation,
}

impl<'a> EndpointRegistrar<'a> {
    pub(crate) fn new(operation: &'a mut Operation) -> Self {
        Self { operation }
    }

    /// Attach a JSON response body for a status code.
    ///
    /// The response node is created on first use. An existing
    /// `application/json` entry for the same status is replaced.
    pub fn attach_response(&mut self, status: u16, schema: SchemaDescriptor) -> &mut Self {
        tracing::debug!(status, "attaching JSON response");

        self.response_mut(status).content.insert(
            JSON_MEDIA_TYPE.to_string(),
            MediaType {
                schema: Some(schema),
            },
        );
        self
    }

    /// Set the description of a response, creating it if needed
    pub fn response_description(&mut self, status: u16, description: &str) -> &mut Self {
        self.response_mut(status).description = description.to_string();
        self
    }

    /// Set the operation summary
    pub fn summary(&mut self, summary: &str) -> &mut Self {
        self.operation.summary = summary.to_string();
        self
    }

    /// Set the operation description
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.operation.description = description.to_string();
        self
    }

    /// Responses registered so far
    pub fn responses(&self) -> &BTreeMap<u16, Response> {
        &self.operation.responses
    }

    fn response_mut(&mut self, status: u16) -> &mut Response {
        self.operation.responses.entry(status).or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{schema_for, SchemaDescriptor};
    use crate::specification::{OpenApiDocument, JSON_MEDIA_TYPE};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn json_schema(document: &OpenApiDocument, status: u16) -> Option<&SchemaDescriptor> {
        document.operation("get", "/foo")?.responses[&status].content[JSON_MEDIA_TYPE]
            .schema
            .as_ref()
    }

    #[test]
    fn test_attach_response_creates_json_content() {
        let mut document = OpenApiDocument::new("API", "1.0.0");
        document
            .register_endpoint("GET", "/foo")
            .attach_response(200, schema_for::<u8>().unwrap());

        let response = &document.operation("GET", "/foo").unwrap().responses[&200];
        assert_eq!(response.description, "");
        assert_eq!(response.content.len(), 1);
        assert_eq!(
            json_schema(&document, 200),
            Some(&SchemaDescriptor::integer(0, Some(255)))
        );
    }

    #[test]
    fn test_attach_response_last_write_wins() {
        let mut document = OpenApiDocument::new("API", "1.0.0");
        document
            .register_endpoint("GET", "/foo")
            .attach_response(200, schema_for::<String>().unwrap())
            .attach_response(404, schema_for::<bool>().unwrap())
            .attach_response(200, schema_for::<i16>().unwrap());

        assert_eq!(
            json_schema(&document, 200),
            Some(&SchemaDescriptor::integer(-32768, Some(32767)))
        );
        assert_eq!(json_schema(&document, 404), Some(&SchemaDescriptor::boolean()));
    }

    #[test]
    fn test_attach_response_keeps_description() {
        let mut document = OpenApiDocument::new("API", "1.0.0");
        document
            .register_endpoint("GET", "/foo")
            .response_description(200, "OK")
            .attach_response(200, schema_for::<String>().unwrap());

        let response = &document.operation("get", "/foo").unwrap().responses[&200];
        assert_eq!(response.description, "OK");
        assert!(response.content.contains_key(JSON_MEDIA_TYPE));
    }

    #[test]
    fn test_operation_text() {
        let mut document = OpenApiDocument::new("API", "1.0.0");
        document
            .register_endpoint("post", "/users")
            .summary("Create user")
            .description("Creates a new user account");

        assert_eq!(
            serde_json::to_value(&document).unwrap()["paths"],
            json!({
                "/users": {
                    "post": {
                        "summary": "Create user",
                        "description": "Creates a new user account"
                    }
                }
            })
        );
    }
}
