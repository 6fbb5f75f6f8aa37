use crate::artifact::ConditionMap;
use crate::error::CompileError;
use crate::graph::{QuestionBlock, ResultBlock};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, warn};

/// One start-to-result route through the graph: the ordered answer pairs
/// accumulated along the way and the result block the route terminates in.
#[derive(Debug, Clone)]
pub(super) struct TracedPath<'a> {
    pub conditions: ConditionMap,
    pub result: &'a ResultBlock,
}

/// Enumerates every start-to-result path depth-first.
///
/// Two branches produce no path: a connection whose target id resolves to
/// neither block map (a dead end), and a connection back into a block that
/// is already on the in-progress path (a cycle). Both are pruned, the
/// latter with a warning. Total output is capped by `max_paths`.
pub(super) struct PathTracer<'a> {
    questions: &'a AHashMap<&'a str, &'a QuestionBlock>,
    results: &'a AHashMap<&'a str, &'a ResultBlock>,
    start_id: &'a str,
    max_paths: usize,
    paths: Vec<TracedPath<'a>>,
}

impl<'a> PathTracer<'a> {
    pub(super) fn new(
        questions: &'a AHashMap<&'a str, &'a QuestionBlock>,
        results: &'a AHashMap<&'a str, &'a ResultBlock>,
        start_id: &'a str,
        max_paths: usize,
    ) -> Self {
        Self {
            questions,
            results,
            start_id,
            max_paths,
            paths: Vec::new(),
        }
    }

    pub(super) fn trace(mut self) -> Result<Vec<TracedPath<'a>>, CompileError> {
        let Some(start) = self.questions.get(self.start_id).copied() else {
            return Ok(self.paths);
        };
        let mut visited = AHashSet::new();
        self.walk(self.start_id, start, ConditionMap::new(), &mut visited)?;
        Ok(self.paths)
    }

    fn walk(
        &mut self,
        block_id: &'a str,
        question: &'a QuestionBlock,
        prefix: ConditionMap,
        visited: &mut AHashSet<&'a str>,
    ) -> Result<(), CompileError> {
        if !visited.insert(block_id) {
            warn!(block = block_id, "cycle in quiz graph, pruning branch");
            return Ok(());
        }

        for (index, target_id) in &question.connections {
            let mut conditions = prefix.clone();
            conditions.insert(question.key.clone(), question.option_text(*index));

            if let Some(next) = self.questions.get(target_id.as_str()).copied() {
                self.walk(target_id, next, conditions, visited)?;
            } else if let Some(result) = self.results.get(target_id.as_str()).copied() {
                if self.paths.len() >= self.max_paths {
                    return Err(CompileError::PathBudgetExceeded {
                        start_id: self.start_id.to_string(),
                        limit: self.max_paths,
                    });
                }
                self.paths.push(TracedPath { conditions, result });
            } else {
                debug!(
                    block = block_id,
                    target = target_id.as_str(),
                    "connection target missing, dropping branch"
                );
            }
        }

        visited.remove(block_id);
        Ok(())
    }
}
