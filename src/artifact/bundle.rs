use super::question::CompiledQuestion;
use super::rule::CompiledRule;
use crate::error::StoreError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// The complete output of one compile: the two engine-ready artifacts.
///
/// The chat runtime consumes the questions and rules as two independent
/// JSON arrays; `save`/`from_file` additionally offer a single-file binary
/// bundle for caching a compiled quiz between processes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompiledQuiz {
    pub questions: Vec<CompiledQuestion>,
    pub rules: Vec<CompiledRule>,
}

/// On-disk bundle layout.
#[derive(Serialize, Deserialize)]
struct BundleWire {
    questions: String,
    rules: String,
}

impl CompiledQuiz {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.rules.is_empty()
    }

    /// The questions artifact: a JSON array, byte-stable for a fixed graph.
    pub fn questions_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.questions).map_err(|e| StoreError::Encode {
            key: "questions".to_string(),
            message: e.to_string(),
        })
    }

    /// The rules artifact: a JSON array, byte-stable for a fixed graph.
    pub fn rules_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.rules).map_err(|e| StoreError::Encode {
            key: "rules".to_string(),
            message: e.to_string(),
        })
    }

    /// Reassembles a quiz from the two persisted JSON artifacts.
    pub fn from_json_artifacts(questions: &str, rules: &str) -> Result<Self, StoreError> {
        let questions: Vec<CompiledQuestion> =
            serde_json::from_str(questions).map_err(|e| StoreError::Decode {
                key: "questions".to_string(),
                message: e.to_string(),
            })?;
        let rules: Vec<CompiledRule> =
            serde_json::from_str(rules).map_err(|e| StoreError::Decode {
                key: "rules".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { questions, rules })
    }

    /// Serializes the whole quiz into the binary bundle format.
    ///
    /// The bundle carries the two JSON artifacts rather than a direct
    /// struct encoding: optional fields are omitted from the artifacts,
    /// which a non-self-describing format cannot round-trip.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        let wire = BundleWire {
            questions: self.questions_json()?,
            rules: self.rules_json()?,
        };
        encode_to_vec(&wire, standard()).map_err(|e| StoreError::Encode {
            key: "bundle".to_string(),
            message: e.to_string(),
        })
    }

    /// Deserializes a quiz from a binary bundle.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let (wire, _): (BundleWire, usize) = decode_from_slice(bytes, standard())
            // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| StoreError::Decode {
                key: "bundle".to_string(),
                message: e.to_string(),
            })?;
        Self::from_json_artifacts(&wire.questions, &wire.rules)
    }

    /// Saves the quiz to a file as a binary bundle.
    pub fn save(&self, path: &str) -> Result<(), StoreError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a quiz bundle from a file.
    pub fn from_file(path: &str) -> Result<Self, StoreError> {
        let mut file = fs::File::open(path).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| StoreError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}
