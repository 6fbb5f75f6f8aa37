use ahash::AHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An insertion-ordered mapping from question keys to answer text.
///
/// Both `show_if` gates and rule `if` maps serialize as JSON objects whose
/// key order is the order the pairs were accumulated along a path, which
/// keeps compiled artifacts byte-stable for a fixed graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConditionMap {
    entries: Vec<(String, String)>,
}

impl ConditionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, value)| value.as_str())
    }

    /// Inserts a pair, overwriting the value in place when the key is
    /// already present (the original position is kept).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The pairs present with the same value in both maps, in `self` order.
    pub fn common_pairs(&self, other: &ConditionMap) -> ConditionMap {
        self.entries
            .iter()
            .filter(|(key, value)| other.get(key.as_str()) == Some(value.as_str()))
            .cloned()
            .collect()
    }

    /// True when every pair in this map is present in the accumulated answers.
    pub fn is_satisfied_by(&self, answers: &AHashMap<String, String>) -> bool {
        self.entries
            .iter()
            .all(|(key, value)| answers.get(key.as_str()) == Some(value))
    }
}

impl FromIterator<(String, String)> for ConditionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = ConditionMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl fmt::Display for ConditionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for ConditionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ConditionMapVisitor;

impl<'de> Visitor<'de> for ConditionMapVisitor {
    type Value = ConditionMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of question keys to answer text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ConditionMap::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ConditionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ConditionMapVisitor)
    }
}
