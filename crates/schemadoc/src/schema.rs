use crate::{
    error::{OpenApiError, OpenApiResult},
    types::{Describe, StructDescriptor, TypeDescriptor, TypeKind},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON Schema type keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    Integer,
    String,
    Object,
}

/// Minimal JSON Schema description of a single type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Schema type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Allowed values (never filled by the mapper)
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty", default)]
    pub enum_values: Vec<String>,

    /// Lower bound, integers only
    #[serde(skip_serializing_if = "is_unset", default)]
    pub minimum: Option<i64>,

    /// Upper bound, integers only
    #[serde(skip_serializing_if = "is_unset", default)]
    pub maximum: Option<i64>,

    /// Object properties keyed by serialized field name
    #[serde(skip_serializing_if = "has_no_properties", default)]
    pub properties: Option<BTreeMap<String, SchemaDescriptor>>,
}

// Zero bounds are dropped on the wire, so unsigned minimums never appear.
fn is_unset(bound: &Option<i64>) -> bool {
    matches!(bound, None | Some(0))
}

fn has_no_properties(properties: &Option<BTreeMap<String, SchemaDescriptor>>) -> bool {
    properties.as_ref().map_or(true, BTreeMap::is_empty)
}

impl SchemaDescriptor {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            enum_values: Vec::new(),
            minimum: None,
            maximum: None,
            properties: None,
        }
    }

    /// Create a boolean schema
    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    /// Create a string schema
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// Create an integer schema with the given bounds
    pub fn integer(minimum: i64, maximum: Option<i64>) -> Self {
        Self {
            minimum: Some(minimum),
            maximum,
            ..Self::new(SchemaType::Integer)
        }
    }

    /// Create an object schema with the given properties
    pub fn object(properties: BTreeMap<String, SchemaDescriptor>) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(SchemaType::Object)
        }
    }

    /// Render the schema as compact JSON
    pub fn to_json(&self) -> OpenApiResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Generate the schema for a type implementing [`Describe`]
pub fn schema_for<T: Describe + ?Sized>() -> OpenApiResult<SchemaDescriptor> {
    map_type(&T::describe())
}

/// Map a type description to its schema.
///
/// Structs are traversed recursively; the first unsupported kind met anywhere
/// in the tree aborts the whole mapping.
pub fn map_type(ty: &TypeDescriptor) -> OpenApiResult<SchemaDescriptor> {
    tracing::trace!(type_name = %ty.type_name, kind = ty.kind.name(), "mapping type");

    let schema = match &ty.kind {
        TypeKind::Bool => SchemaDescriptor::boolean(),
        TypeKind::I8 => SchemaDescriptor::integer(i8::MIN.into(), Some(i8::MAX.into())),
        TypeKind::I16 => SchemaDescriptor::integer(i16::MIN.into(), Some(i16::MAX.into())),
        TypeKind::I32 | TypeKind::Isize => {
            SchemaDescriptor::integer(i32::MIN.into(), Some(i32::MAX.into()))
        }
        TypeKind::I64 => SchemaDescriptor::integer(i64::MIN, Some(i64::MAX)),
        TypeKind::U8 => SchemaDescriptor::integer(0, Some(u8::MAX.into())),
        TypeKind::U16 => SchemaDescriptor::integer(0, Some(u16::MAX.into())),
        TypeKind::U32 | TypeKind::Usize => SchemaDescriptor::integer(0, Some(u32::MAX.into())),
        // u64::MAX does not fit the bound type; leave it open rather than clamp
        TypeKind::U64 => SchemaDescriptor::integer(0, None),
        TypeKind::F32 | TypeKind::F64 | TypeKind::String => SchemaDescriptor::string(),
        TypeKind::Struct(structure) => map_struct(structure)?,
        other => {
            tracing::debug!(
                type_name = %ty.type_name,
                kind = other.name(),
                "no schema rule for type kind"
            );
            return Err(OpenApiError::unsupported_type(other.name(), &ty.type_name));
        }
    };

    Ok(schema)
}

fn map_struct(structure: &StructDescriptor) -> OpenApiResult<SchemaDescriptor> {
    let mut properties = BTreeMap::new();

    for field in &structure.fields {
        let name = field.serialized_name();
        if !field.is_visible() {
            tracing::debug!(field = %field.ident, name, "skipping hidden field");
            continue;
        }

        properties.insert(name.to_string(), map_type(&field.ty)?);
    }

    Ok(SchemaDescriptor::object(properties))
}
