use thiserror::Error;

/// Errors that can occur while parsing or compiling a quiz graph.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("Failed to parse quiz graph JSON: {0}")]
    JsonParseError(String),

    #[error("Quiz graph JSON has no 'blocks' object")]
    MissingBlocks,

    #[error("Tracing from start block '{start_id}' exceeded the budget of {limit} paths")]
    PathBudgetExceeded { start_id: String, limit: usize },
}

/// Errors that can occur when converting a custom user format into a `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid custom graph data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while encoding, decoding, or persisting compiled artifacts.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Failed to encode artifact '{key}': {message}")]
    Encode { key: String, message: String },

    #[error("Failed to decode artifact '{key}': {message}")]
    Decode { key: String, message: String },

    #[error("Artifact store backend failed for key '{key}': {message}")]
    Backend { key: String, message: String },

    #[error("Artifact I/O failed for '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur while answering questions in a running quiz session.
#[derive(Error, Debug, Clone)]
pub enum RunError {
    #[error("No question with key '{0}' exists in this quiz")]
    UnknownQuestion(String),

    #[error("Question '{key}' does not offer the answer '{answer}'")]
    UnknownAnswer { key: String, answer: String },
}

/// Either failure mode of the end-to-end compile-and-publish flow.
#[derive(Error, Debug, Clone)]
pub enum PublishError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
