//! Common test utilities for building quiz graph definitions.
use quizflow::prelude::*;

#[allow(dead_code)]
pub fn question(
    id: &str,
    key: &str,
    text: &str,
    options: &[&str],
    connections: &[(u32, &str)],
) -> BlockDefinition {
    BlockDefinition {
        id: id.to_string(),
        kind: BlockKind::Question(QuestionBlock {
            key: key.to_string(),
            question: text.to_string(),
            options: options.iter().map(|option| option.to_string()).collect(),
            connections: connections
                .iter()
                .map(|(index, target)| (*index, target.to_string()))
                .collect(),
        }),
    }
}

#[allow(dead_code)]
pub fn result(id: &str, label: &str, summary: &str) -> BlockDefinition {
    BlockDefinition {
        id: id.to_string(),
        kind: BlockKind::Result(ResultBlock {
            label: label.to_string(),
            summary: summary.to_string(),
            products: vec![],
        }),
    }
}

#[allow(dead_code)]
pub fn conditions(pairs: &[(&str, &str)]) -> ConditionMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// One question routing straight to two results.
///
/// Logic: `skin_type == Dry -> r1`, `skin_type == Oily -> r2`
#[allow(dead_code)]
pub fn single_question_graph() -> GraphDefinition {
    GraphDefinition {
        blocks: vec![
            question(
                "q1",
                "skin_type",
                "How would you describe your skin?",
                &["Dry", "Oily"],
                &[(0, "r1"), (1, "r2")],
            ),
            result("r1", "Dry skin routine", "A gentle, hydrating set."),
            result("r2", "Oily skin routine", "A balancing, mattifying set."),
        ],
    }
}

/// A follow-up question on one branch only.
///
/// Logic: `Dry` leads into an age question with two outcomes; `Oily`
/// goes straight to its own outcome.
#[allow(dead_code)]
pub fn branching_graph() -> GraphDefinition {
    GraphDefinition {
        blocks: vec![
            question(
                "q1",
                "skin_type",
                "How would you describe your skin?",
                &["Dry", "Oily"],
                &[(0, "q2"), (1, "r3")],
            ),
            question(
                "q2",
                "age",
                "What is your age group?",
                &["Young", "Mature"],
                &[(0, "r1"), (1, "r2")],
            ),
            result("r1", "Light hydration", "A light moisturizer works best."),
            result("r2", "Rich hydration", "A richer cream works best."),
            result("r3", "Oil control", "Start with a balancing cleanser."),
        ],
    }
}

/// Two mutually referencing questions; only one branch escapes to a result.
#[allow(dead_code)]
pub fn cyclic_graph() -> GraphDefinition {
    GraphDefinition {
        blocks: vec![
            question(
                "q1",
                "skin_type",
                "How would you describe your skin?",
                &["Dry", "Oily"],
                &[(0, "q2")],
            ),
            question(
                "q2",
                "age",
                "What is your age group?",
                &["Young", "Mature"],
                &[(0, "q1"), (1, "r1")],
            ),
            result("r1", "Rich hydration", "A richer cream works best."),
        ],
    }
}

/// One connection points at a block id that does not exist.
#[allow(dead_code)]
pub fn dangling_target_graph() -> GraphDefinition {
    GraphDefinition {
        blocks: vec![
            question(
                "q1",
                "skin_type",
                "How would you describe your skin?",
                &["Dry", "Oily"],
                &[(0, "r1"), (1, "ghost")],
            ),
            result("r1", "Dry skin routine", "A gentle, hydrating set."),
        ],
    }
}

/// The referenced question is listed before the actual start block.
#[allow(dead_code)]
pub fn reordered_graph() -> GraphDefinition {
    GraphDefinition {
        blocks: vec![
            question(
                "q2",
                "age",
                "What is your age group?",
                &["Young", "Mature"],
                &[(0, "r1"), (1, "r2")],
            ),
            question(
                "q1",
                "skin_type",
                "How would you describe your skin?",
                &["Dry", "Oily"],
                &[(0, "q2"), (1, "r2")],
            ),
            result("r1", "Light hydration", "A light moisturizer works best."),
            result("r2", "Rich hydration", "A richer cream works best."),
        ],
    }
}
