use super::condition::ConditionMap;
use serde::{Deserialize, Serialize};

/// A question ready for the quiz runtime, in presentation order.
///
/// `show_if` carries the minimal condition under which the question is
/// offered; a question shown on every path has no gate and the field is
/// omitted from the serialized artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompiledQuestion {
    pub key: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ConditionMap>,
}
