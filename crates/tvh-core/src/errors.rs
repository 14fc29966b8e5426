//! Structured error types shared across TVH crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TvhError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, paths, offending values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the TVH engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TvhError {
    /// A vertex or hyperedge identifier is not part of the hypergraph.
    #[error("entity not found: {0}")]
    EntityNotFound(ErrorInfo),
    /// The hypergraph could not be constructed from the supplied mappings.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// A document or value could not be decoded.
    #[error("decode error: {0}")]
    Decode(ErrorInfo),
    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// A configuration file or option is invalid.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TvhError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TvhError::EntityNotFound(info)
            | TvhError::Graph(info)
            | TvhError::Decode(info)
            | TvhError::Io(info)
            | TvhError::Config(info) => info,
        }
    }

    /// Returns whether this error reports a missing vertex or hyperedge.
    pub fn is_entity_not_found(&self) -> bool {
        matches!(self, TvhError::EntityNotFound(_))
    }

    /// Builds an [`TvhError::EntityNotFound`] for an unknown vertex.
    pub fn unknown_vertex(vertex: &impl fmt::Debug) -> Self {
        TvhError::EntityNotFound(
            ErrorInfo::new("unknown-vertex", "vertex does not exist")
                .with_context("vertex", format!("{vertex:?}")),
        )
    }

    /// Builds an [`TvhError::EntityNotFound`] for an unknown hyperedge.
    pub fn unknown_hyperedge(hyperedge: &impl fmt::Debug) -> Self {
        TvhError::EntityNotFound(
            ErrorInfo::new("unknown-hyperedge", "hyperedge does not exist")
                .with_context("hyperedge", format!("{hyperedge:?}")),
        )
    }
}
