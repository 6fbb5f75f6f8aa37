use super::tracer::TracedPath;
use crate::artifact::ConditionMap;
use ahash::AHashMap;
use itertools::Itertools;

/// Derives each used question's `show_if` gate from the prefixes of the
/// enumerated paths.
///
/// A question's prefix on one path is every pair accumulated before its
/// own answer. When all paths reach the question with the same prefix,
/// that prefix is the gate; when they diverge, only the pairs shared by
/// every prefix survive. An empty gate means the question is always shown.
pub(super) struct ConditionSynthesizer {
    keys: Vec<String>,
    prefixes: AHashMap<String, Vec<ConditionMap>>,
}

impl ConditionSynthesizer {
    pub(super) fn from_paths(paths: &[TracedPath<'_>]) -> Self {
        let keys: Vec<String> = paths
            .iter()
            .flat_map(|path| path.conditions.iter().map(|(key, _)| key))
            .unique()
            .map(str::to_string)
            .collect();

        let mut prefixes: AHashMap<String, Vec<ConditionMap>> = AHashMap::new();
        for path in paths {
            let mut prefix = ConditionMap::new();
            for (key, answer) in path.conditions.iter() {
                prefixes.entry(key.to_string()).or_default().push(prefix.clone());
                prefix.insert(key.to_string(), answer.to_string());
            }
        }

        Self { keys, prefixes }
    }

    /// Used question keys in first-discovery order.
    pub(super) fn used_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The gate for one question, or `None` when it is always shown.
    pub(super) fn show_if(&self, key: &str) -> Option<ConditionMap> {
        let prefixes = self.prefixes.get(key)?;
        let (first, rest) = prefixes.split_first()?;
        let common = rest
            .iter()
            .fold(first.clone(), |acc, prefix| acc.common_pairs(prefix));
        if common.is_empty() { None } else { Some(common) }
    }
}
