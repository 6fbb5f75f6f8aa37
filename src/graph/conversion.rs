use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a `GraphDefinition`.
///
/// This is the primary extension point for making the compiler format-agnostic.
/// The builder UI's JSON blob is covered by [`GraphDefinition::from_json`]; any
/// other in-memory quiz representation can implement this trait instead and
/// feed the compiler directly.
///
/// # Example
///
/// ```rust,no_run
/// use quizflow::prelude::*;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep {
///     id: String,
///     prompt: String,
///     choices: Vec<String>,
/// }
/// struct MyQuiz {
///     steps: Vec<MyStep>,
///     outcome_id: String,
///     outcome_label: String,
/// }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyQuiz {
///     fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
///         if self.steps.is_empty() {
///             return Err(GraphConversionError::ValidationError(
///                 "quiz has no steps".to_string(),
///             ));
///         }
///
///         let mut blocks = Vec::new();
///         for step in self.steps {
///             blocks.push(BlockDefinition {
///                 id: step.id.clone(),
///                 kind: BlockKind::Question(QuestionBlock {
///                     key: step.id,
///                     question: step.prompt,
///                     options: step.choices,
///                     // Your logic to wire options to follow-up blocks.
///                     connections: vec![(0, self.outcome_id.clone())],
///                 }),
///             });
///         }
///         blocks.push(BlockDefinition {
///             id: self.outcome_id,
///             kind: BlockKind::Result(ResultBlock {
///                 label: self.outcome_label,
///                 summary: String::new(),
///                 products: vec![],
///             }),
///         });
///
///         Ok(GraphDefinition { blocks })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compilable quiz graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
