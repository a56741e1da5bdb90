// Errors raised while collecting ontology metadata

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// A record file or graph could not be read. Loaders log this and fall back to defaults.
    #[error("Failed to read metadata from {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A record line could not be decoded.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A multi-value field whose names list is mandatory was absent.
    #[error("Missing mandatory field '{key}'")]
    MissingField { key: String },

    #[error("No owl:Ontology declaration found in the graph")]
    NoDescriptiveNode,

    #[error("Found {count} owl:Ontology declarations in the graph; expected exactly one")]
    AmbiguousDescriptiveNode { count: usize },
}

impl MetadataError {
    pub fn source_unavailable(source_name: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        MetadataError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_field(key: &str) -> Self {
        MetadataError::MissingField {
            key: key.to_string(),
        }
    }

    /// True for the failures that degrade to defaults instead of aborting a load.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MetadataError::SourceUnavailable { .. } | MetadataError::MalformedRecord { .. }
        )
    }
}
