use super::condition::ConditionMap;
use serde::{Deserialize, Serialize};

/// An outcome rule: the full ordered condition map of one start-to-result
/// path, paired with the payload of the result block it terminates in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompiledRule {
    #[serde(rename = "if")]
    pub conditions: ConditionMap,
    pub label: String,
    pub summary: String,
    pub products: Vec<serde_json::Value>,
}
