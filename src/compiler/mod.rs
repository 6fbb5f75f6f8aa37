use crate::artifact::{CompiledQuestion, CompiledQuiz, CompiledRule};
use crate::error::CompileError;
use crate::graph::{GraphDefinition, QuestionBlock, ResultBlock};
use ahash::AHashMap;
use tracing::debug;

mod conditions;
mod tracer;

use conditions::ConditionSynthesizer;
use tracer::PathTracer;

/// Hard ceiling for the path enumeration, so a highly branching graph
/// fails closed instead of consuming the whole request.
pub const DEFAULT_MAX_PATHS: usize = 10_000;

/// Compiles a quiz graph into the two engine-ready artifacts: an ordered,
/// conditionally gated question list and a set of outcome rules.
pub struct Compiler {
    graph: GraphDefinition,
    max_paths: usize,
}

pub struct CompilerBuilder {
    graph: GraphDefinition,
    max_paths: usize,
}

impl CompilerBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }

    /// Overrides the path budget. Compilation aborts with
    /// [`CompileError::PathBudgetExceeded`] once the graph yields more paths.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            graph: self.graph,
            max_paths: self.max_paths,
        }
    }
}

impl Compiler {
    pub fn builder(graph: GraphDefinition) -> CompilerBuilder {
        CompilerBuilder::new(graph)
    }

    /// Runs the full pipeline: partition blocks, pick the start question,
    /// enumerate every start-to-result path, synthesize per-question gates,
    /// and emit questions plus rules.
    ///
    /// Questions come out in first-discovery order; rules in path-discovery
    /// order. Questions no path reaches are dropped entirely.
    pub fn compile(self) -> Result<CompiledQuiz, CompileError> {
        let question_order: Vec<(&str, &QuestionBlock)> = self.graph.questions().collect();
        let questions_by_id: AHashMap<&str, &QuestionBlock> =
            question_order.iter().copied().collect();
        let results_by_id: AHashMap<&str, &ResultBlock> = self.graph.results().collect();

        let Some(start_id) = find_start(&question_order) else {
            debug!("quiz graph has no question blocks, compiling to empty artifacts");
            return Ok(CompiledQuiz::default());
        };

        let paths = PathTracer::new(&questions_by_id, &results_by_id, start_id, self.max_paths)
            .trace()?;

        let synthesizer = ConditionSynthesizer::from_paths(&paths);

        // Two blocks sharing a key collapse into one logical question; the
        // earliest block in graph order supplies its text and options.
        let mut blocks_by_key: AHashMap<&str, &QuestionBlock> = AHashMap::new();
        for (_, question) in question_order.iter().copied() {
            blocks_by_key.entry(question.key.as_str()).or_insert(question);
        }

        let mut questions = Vec::new();
        for key in synthesizer.used_keys() {
            if let Some(block) = blocks_by_key.get(key) {
                questions.push(CompiledQuestion {
                    key: key.to_string(),
                    question: block.question.clone(),
                    options: block.options.clone(),
                    show_if: synthesizer.show_if(key),
                });
            }
        }

        let rules: Vec<CompiledRule> = paths
            .iter()
            .map(|path| CompiledRule {
                conditions: path.conditions.clone(),
                label: path.result.label.clone(),
                summary: path.result.summary.clone(),
                products: path.result.products.clone(),
            })
            .collect();

        debug!(
            start = start_id,
            questions = questions.len(),
            rules = rules.len(),
            "quiz graph compiled"
        );
        Ok(CompiledQuiz { questions, rules })
    }
}

/// The start block is the first question no other question connects to.
/// When every question is referenced (a cycle, or a malformed graph), the
/// first question in graph order stands in.
fn find_start<'a>(questions: &[(&'a str, &'a QuestionBlock)]) -> Option<&'a str> {
    questions
        .iter()
        .find(|(id, _)| {
            !questions.iter().any(|(other_id, other)| {
                *other_id != *id
                    && other
                        .connections
                        .iter()
                        .any(|(_, target)| target.as_str() == *id)
            })
        })
        .or_else(|| questions.first())
        .map(|(id, _)| *id)
}
