//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! quizflow crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use quizflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load and compile a quiz graph
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let graph = GraphDefinition::from_json(&graph_json)?;
//! let quiz = Compiler::builder(graph).build().compile()?;
//!
//! // Publish the artifacts to a store
//! let mut store = MemoryStore::new();
//! quizflow::store::publish(&mut store, &ArtifactKeys::default(), &quiz)?;
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{Compiler, CompilerBuilder};

// Graph input model
pub use crate::graph::{
    BlockDefinition, BlockKind, GraphDefinition, IntoGraph, QuestionBlock, ResultBlock,
};

// Compiled artifacts
pub use crate::artifact::{CompiledQuestion, CompiledQuiz, CompiledRule, ConditionMap};

// Runtime
pub use crate::runtime::QuizSession;

// Persistence seam
pub use crate::store::{ArtifactKeys, ArtifactStore, MemoryStore};

// Error types
pub use crate::error::{
    CompileError, GraphConversionError, PublishError, RunError, StoreError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
