use std::path::PathBuf;
use thiserror::Error;

/// Failures of the document stores backing the repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Couldn't access document storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't serialize documents: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the services to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced recipe, ingredient or image does not exist.
    #[error("{entity} not found for id {id}")]
    NotFound { entity: &'static str, id: String },
    /// Input was malformed; nothing was written.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// A referenced lookup entity (unit of measure) does not exist.
    #[error("{entity} {id} could not be resolved")]
    DependencyUnresolved { entity: &'static str, id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ServiceError::NotFound { entity, id: id.into() }
    }

    pub fn unresolved(entity: &'static str, id: impl Into<String>) -> Self {
        ServiceError::DependencyUnresolved { entity, id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        ServiceError::Store(StoreError::Io(error))
    }
}

/// Startup failures. These are fatal; `main` panics with the message.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Couldn't determine the home directory")]
    MissingHomeDirectory,
    #[error("Couldn't read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Couldn't parse resource strings: {0}")]
    Xml(String),
    #[error("Couldn't parse {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("Couldn't register template {name}: {source}")]
    Template { name: String, source: handlebars::TemplateError },
}
