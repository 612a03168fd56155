/*!
# schemadoc

JSON Schema descriptors for Rust types, assembled into minimal OpenAPI 3.0
documents.

## Features

- Compile-time type descriptions through `#[derive(Describe)]`
- Schema mapping with per-kind integer bounds
- Field renaming and visibility by serialized name
- Lazily built path/method/status document tree
- JSON and YAML export

## Usage

```rust,no_run
use schemadoc::{schema_for, Describe, OpenApiDocument};

#[derive(Describe)]
struct Pet {
    #[schema(rename = "Name")]
    name: String,
    #[schema(rename = "Age")]
    age: u8,
    // lower-case serialized name, left out of the schema
    internal_id: u64,
}

let mut document = OpenApiDocument::new("Pet Store", "1.0.0");
document
    .register_endpoint("GET", "/pets")
    .attach_response(200, schema_for::<Pet>().unwrap());
println!("{}", document.to_json_pretty().unwrap());
```
*/

// Re-export main types
pub use crate::{
    config::{DocumentConfig, ServerConfig},
    endpoints::EndpointRegistrar,
    error::{OpenApiError, OpenApiResult},
    schema::{map_type, schema_for, SchemaDescriptor, SchemaType},
    specification::{
        Info, MediaType, OpenApiDocument, Operation, Paths, Response, Server, JSON_MEDIA_TYPE,
        OPENAPI_VERSION,
    },
    types::{Describe, FieldDescriptor, StructDescriptor, TypeDescriptor, TypeKind},
};

// Re-export the derive macro from the proc-macro crate
pub use schemadoc_derive::Describe;

// Core modules
pub mod config;
pub mod error;
pub mod specification;

// Schema generation
pub mod schema;
pub mod types;

// Endpoint registration
pub mod endpoints;

// Export functionality
pub mod export;

// Test utilities
#[cfg(test)]
mod test_utils;
