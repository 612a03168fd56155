use thiserror::Error;

/// Result type for schema mapping and document export
pub type OpenApiResult<T> = Result<T, OpenApiError>;

/// Errors that can occur while building or exporting a document
#[derive(Debug, Error)]
pub enum OpenApiError {
    /// The mapper met a type kind it has no schema rule for
    #[error("unsupported type kind `{kind}` for `{type_name}`")]
    UnsupportedType { kind: String, type_name: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OpenApiError {
    /// Create a new unsupported type error
    pub fn unsupported_type<K: ToString, N: ToString>(kind: K, type_name: N) -> Self {
        Self::UnsupportedType {
            kind: kind.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Kind name carried by an unsupported type error
    pub fn unsupported_kind(&self) -> Option<&str> {
        match self {
            Self::UnsupportedType { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
