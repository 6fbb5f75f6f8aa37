//! # Quizflow - Quiz Graph Compilation Engine
//!
//! **Quizflow** turns the node/edge graphs produced by a visual quiz builder
//! into flat, engine-ready artifacts: an ordered list of questions, each
//! optionally gated by a `show_if` condition, and a list of outcome rules
//! matching accumulated answers to a result payload. A separate chat or quiz
//! runtime walks those artifacts at conversation time; this crate also ships
//! a small reference walker with exactly those semantics.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a quiz graph. The primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse the builder UI's serialized blob with
//!     [`GraphDefinition::from_json`](graph::GraphDefinition::from_json), or
//!     implement the [`IntoGraph`](graph::IntoGraph) trait for your own format.
//! 2.  **Compile**: Use `Compiler::builder` to create a compiler instance
//!     with the `GraphDefinition`. The compiler enumerates every path from
//!     the start question to a result and reduces them into questions and
//!     rules.
//! 3.  **Publish**: Hand the two JSON artifacts to your persistence layer
//!     through the [`store::ArtifactStore`] seam, or cache the whole quiz as
//!     a binary bundle.
//! 4.  **Run**: Drive a [`QuizSession`](runtime::QuizSession) against the
//!     compiled quiz, or let an external runtime read the artifacts verbatim.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quizflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the graph the builder UI persisted.
//!     let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//!     let graph = GraphDefinition::from_json(&graph_json)?;
//!
//!     // 2. Compile it into the two artifacts.
//!     let quiz = Compiler::builder(graph).build().compile()?;
//!     println!("Compiled {} questions, {} rules", quiz.questions.len(), quiz.rules.len());
//!
//!     // 3. The artifacts an external runtime would consume:
//!     println!("{}", quiz.questions_json()?);
//!     println!("{}", quiz.rules_json()?);
//!
//!     // 4. Or walk the quiz here.
//!     let mut session = QuizSession::new(&quiz);
//!     while let Some(question) = session.current_question() {
//!         // Your UI picks an answer; we take the first option.
//!         session.answer(&question.key, &question.options[0])?;
//!     }
//!     match session.outcome() {
//!         Some(rule) => println!("-> Outcome: {} ({})", rule.label, rule.summary),
//!         None => println!("-> No outcome matched."),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod runtime;
pub mod store;
