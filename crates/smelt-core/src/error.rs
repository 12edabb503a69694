//! Error types for the smelt library.

use std::path::PathBuf;

use thiserror::Error;

use crate::llm::CompletionError;

/// Comprehensive error type for all smelt operations.
#[derive(Error, Debug)]
pub enum SmeltError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The backing store exists but does not look like a roadmap
    #[error("Corrupted schema: {message}")]
    Schema { message: String },
    /// Step not found for the given ID
    #[error("No step found with id {id}")]
    StepNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}'")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The coding agent executable could not be located
    #[error("{binary} is not installed or not in PATH.")]
    AgentNotFound {
        binary: String,
        #[source]
        source: which::Error,
    },
    /// The coding agent was located but could not be started
    #[error("Failed to launch {binary}")]
    AgentInvocation {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    /// Plan text could not be turned into steps
    #[error(transparent)]
    PlanParse(#[from] PlanParseError),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The next step could not be read from the roadmap
    #[error(transparent)]
    RoadmapRead(Box<SmeltError>),
    /// The agent finished successfully but the completion was not recorded
    #[error("Agent succeeded but failed to mark step {id} as done")]
    MarkDoneFailed {
        id: u64,
        #[source]
        source: Box<SmeltError>,
    },
}

/// Failures of the plan import pipeline.
#[derive(Error, Debug)]
pub enum PlanParseError {
    /// The completion provider gave up
    #[error("LLM call failed")]
    LlmCall {
        #[from]
        source: CompletionError,
    },
    /// The response was not JSON, even after removing code fences
    #[error("LLM returned invalid JSON: {raw:?}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
    /// The response was JSON but not a list of `{description, done}` objects
    #[error("LLM returned unexpected structure: {raw:?}")]
    UnexpectedStructure { raw: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> SmeltError {
        SmeltError::Database {
            message: self.message,
            source,
        }
    }
}

impl SmeltError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error originated in the persistence layer.
    ///
    /// `StepNotFound` counts as a storage fault: it is the more specific
    /// form raised when a mutation targets an id the store does not hold.
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            Self::Database { .. }
                | Self::Schema { .. }
                | Self::StepNotFound { .. }
                | Self::InvalidInput { .. }
                | Self::FileSystem { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SmeltError::database(message).with_source(e))
    }
}

/// Result type alias for smelt operations
pub type Result<T> = std::result::Result<T, SmeltError>;
