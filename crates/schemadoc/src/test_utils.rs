use crate::{
    specification::OpenApiDocument,
    types::{Describe, FieldDescriptor, TypeDescriptor},
};

/// Create a test document with metadata and servers
pub fn create_test_document() -> OpenApiDocument {
    let mut document = OpenApiDocument::new("Test API", "1.0.0").with_description("A test API");
    document
        .add_server("http://localhost:3000", Some("Development server"))
        .add_server("https://api.example.com", None);
    document
}

/// `{ Foo: String, Bar: u8 }`
pub fn simple_structure() -> TypeDescriptor {
    TypeDescriptor::structure(
        "SimpleStructure",
        vec![
            FieldDescriptor::new("Foo", String::describe()),
            FieldDescriptor::new("Bar", u8::describe()),
        ],
    )
}

/// Struct with a renamed field, a nested struct and hidden fields at both levels
pub fn nested_structure() -> TypeDescriptor {
    let nested = TypeDescriptor::structure(
        "NestedStructure",
        vec![
            FieldDescriptor::new("Foo1", String::describe()),
            FieldDescriptor::new("Bar1", u8::describe()),
            FieldDescriptor::new("ignored", u16::describe()),
        ],
    );

    TypeDescriptor::structure(
        "SimpleStructure",
        vec![
            FieldDescriptor::new("Foo", String::describe()).with_annotation("TheName"),
            FieldDescriptor::new("Bar", nested),
            FieldDescriptor::new("ignored", u16::describe()),
        ],
    )
}
