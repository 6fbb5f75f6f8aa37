use crate::artifact::CompiledQuiz;
use crate::compiler::Compiler;
use crate::error::{PublishError, StoreError};
use crate::graph::GraphDefinition;
use ahash::AHashMap;
use tracing::debug;

/// Keys under which the two artifacts live in the external store.
#[derive(Debug, Clone)]
pub struct ArtifactKeys {
    pub questions: String,
    pub rules: String,
}

impl Default for ArtifactKeys {
    fn default() -> Self {
        Self {
            questions: "quiz_questions".to_string(),
            rules: "quiz_rules".to_string(),
        }
    }
}

/// The injected persistence seam: an opaque key-value store owned by the
/// host application. The compiler itself never touches it; only the
/// publish/load helpers below do.
pub trait ArtifactStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// In-process store used by tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Writes both artifacts to the store. Both are encoded before either
/// write happens, so an encoding failure leaves previously published
/// artifacts untouched.
pub fn publish(
    store: &mut dyn ArtifactStore,
    keys: &ArtifactKeys,
    quiz: &CompiledQuiz,
) -> Result<(), StoreError> {
    let questions = quiz.questions_json()?;
    let rules = quiz.rules_json()?;
    store.save(&keys.questions, questions.as_bytes())?;
    store.save(&keys.rules, rules.as_bytes())?;
    debug!(
        questions = quiz.questions.len(),
        rules = quiz.rules.len(),
        "published quiz artifacts"
    );
    Ok(())
}

/// Reads both artifacts back into a quiz. `Ok(None)` when either key has
/// never been published.
pub fn load_published(
    store: &dyn ArtifactStore,
    keys: &ArtifactKeys,
) -> Result<Option<CompiledQuiz>, StoreError> {
    let (Some(questions), Some(rules)) = (store.load(&keys.questions)?, store.load(&keys.rules)?)
    else {
        return Ok(None);
    };
    let questions = String::from_utf8(questions).map_err(|e| StoreError::Decode {
        key: keys.questions.clone(),
        message: e.to_string(),
    })?;
    let rules = String::from_utf8(rules).map_err(|e| StoreError::Decode {
        key: keys.rules.clone(),
        message: e.to_string(),
    })?;
    CompiledQuiz::from_json_artifacts(&questions, &rules).map(Some)
}

/// The end-to-end flow behind the builder UI's save button: parse the
/// serialized graph, compile it, and publish the artifacts. Nothing is
/// written unless every step succeeds.
pub fn compile_and_publish(
    store: &mut dyn ArtifactStore,
    keys: &ArtifactKeys,
    graph_json: &str,
) -> Result<CompiledQuiz, PublishError> {
    let graph = GraphDefinition::from_json(graph_json)?;
    let quiz = Compiler::builder(graph).build().compile()?;
    publish(store, keys, &quiz)?;
    Ok(quiz)
}
