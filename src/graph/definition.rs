use crate::error::CompileError;
use serde::Deserialize;
use tracing::warn;

/// The complete, canonical definition of a quiz flow graph, ready for compilation.
/// This is the target structure for any custom data model conversion.
///
/// Block order is the graph's iteration order: it decides the start-block
/// fallback and keeps compiled artifacts deterministic for a fixed input.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub blocks: Vec<BlockDefinition>,
}

/// A single block of the visual graph together with its id.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub id: String,
    pub kind: BlockKind,
}

/// The two block shapes the builder UI produces.
#[derive(Debug, Clone)]
pub enum BlockKind {
    Question(QuestionBlock),
    Result(ResultBlock),
}

/// A question node: an ordered set of answer options, each optionally
/// connected to a follow-up block.
#[derive(Debug, Clone)]
pub struct QuestionBlock {
    /// Stable identifier used in conditions and answer sets.
    pub key: String,
    pub question: String,
    pub options: Vec<String>,
    /// Sparse mapping from option index to target block id, in the order
    /// the builder UI stored the entries.
    pub connections: Vec<(u32, String)>,
}

impl QuestionBlock {
    /// Display text for the option behind a connection index.
    /// Indices outside the options list get a synthesized label.
    pub fn option_text(&self, index: u32) -> String {
        self.options
            .get(index as usize)
            .cloned()
            .unwrap_or_else(|| format!("Option {}", index))
    }
}

/// A terminal outcome node.
#[derive(Debug, Clone, Default)]
pub struct ResultBlock {
    pub label: String,
    pub summary: String,
    /// Opaque product references, passed through to the rule artifact untouched.
    pub products: Vec<serde_json::Value>,
}

// Wire-format structs matching the builder UI's persisted JSON.
// Only used by `GraphDefinition::from_json`.

#[derive(Deserialize)]
struct RawBlock {
    #[serde(default, rename = "type")]
    block_type: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    connections: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    products: Option<Vec<serde_json::Value>>,
}

impl GraphDefinition {
    /// Parses the builder UI's serialized blob: `{ "blocks": { "<id>": {...}, ... } }`.
    ///
    /// Missing fields are defaulted rather than rejected: a question without a
    /// `key` gets one derived from its text, a question without `options` gets
    /// two placeholders, and absent result fields fall back to generic values.
    /// Blocks of unrecognized type are skipped with a warning.
    pub fn from_json(input: &str) -> Result<Self, CompileError> {
        let document: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| CompileError::JsonParseError(e.to_string()))?;
        let raw_blocks = document
            .get("blocks")
            .and_then(|b| b.as_object())
            .ok_or(CompileError::MissingBlocks)?;

        let mut blocks = Vec::with_capacity(raw_blocks.len());
        for (id, value) in raw_blocks {
            let raw: RawBlock = match serde_json::from_value(value.clone()) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(block = id.as_str(), error = %e, "skipping malformed block");
                    continue;
                }
            };
            if let Some(kind) = build_block(id, raw) {
                blocks.push(BlockDefinition {
                    id: id.clone(),
                    kind,
                });
            }
        }
        Ok(Self { blocks })
    }

    /// Iterates all question blocks with their ids, in graph order.
    pub fn questions(&self) -> impl Iterator<Item = (&str, &QuestionBlock)> {
        self.blocks.iter().filter_map(|block| match &block.kind {
            BlockKind::Question(question) => Some((block.id.as_str(), question)),
            BlockKind::Result(_) => None,
        })
    }

    /// Iterates all result blocks with their ids, in graph order.
    pub fn results(&self) -> impl Iterator<Item = (&str, &ResultBlock)> {
        self.blocks.iter().filter_map(|block| match &block.kind {
            BlockKind::Result(result) => Some((block.id.as_str(), result)),
            BlockKind::Question(_) => None,
        })
    }
}

fn build_block(id: &str, raw: RawBlock) -> Option<BlockKind> {
    match raw.block_type.as_deref() {
        Some("question") => {
            let question = raw.question.unwrap_or_default();
            let key = raw
                .key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| derive_key(&question));
            let options = match raw.options {
                Some(options) if !options.is_empty() => options,
                _ => vec!["Option 1".to_string(), "Option 2".to_string()],
            };
            let connections = raw
                .connections
                .map(|entries| parse_connections(id, entries))
                .unwrap_or_default();
            Some(BlockKind::Question(QuestionBlock {
                key,
                question,
                options,
                connections,
            }))
        }
        Some("result") => Some(BlockKind::Result(ResultBlock {
            label: raw
                .label
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| "Result".to_string()),
            summary: raw.summary.unwrap_or_default(),
            products: raw.products.unwrap_or_default(),
        })),
        other => {
            warn!(
                block = id,
                block_type = other.unwrap_or("<none>"),
                "skipping block of unrecognized type"
            );
            None
        }
    }
}

fn parse_connections(
    block_id: &str,
    entries: serde_json::Map<String, serde_json::Value>,
) -> Vec<(u32, String)> {
    let mut connections = Vec::with_capacity(entries.len());
    for (option, target) in &entries {
        match (option.parse::<u32>(), target.as_str()) {
            (Ok(index), Some(target)) => connections.push((index, target.to_string())),
            _ => warn!(
                block = block_id,
                option = option.as_str(),
                "ignoring malformed connection entry"
            ),
        }
    }
    connections
}

/// Derives a stable question key from its display text: lowercased, with
/// non-alphanumeric runs collapsed to single underscores.
fn derive_key(question: &str) -> String {
    let mut key = String::with_capacity(question.len());
    let mut pending_separator = false;
    for c in question.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if key.is_empty() {
        key.push_str("question");
    }
    key
}
