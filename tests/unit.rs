//! Unit tests for core quizflow functionality.
mod common;
use quizflow::prelude::*;

#[test]
fn test_condition_map_preserves_insertion_order() {
    let mut map = ConditionMap::new();
    map.insert("skin_type", "Dry");
    map.insert("age", "Young");

    let serialized = serde_json::to_string(&map).expect("Failed to encode");
    assert_eq!(serialized, r#"{"skin_type":"Dry","age":"Young"}"#);

    // Overwriting keeps the original position.
    map.insert("skin_type", "Oily");
    let serialized = serde_json::to_string(&map).expect("Failed to encode");
    assert_eq!(serialized, r#"{"skin_type":"Oily","age":"Young"}"#);
}

#[test]
fn test_condition_map_display() {
    let mut map = ConditionMap::new();
    assert_eq!(format!("{}", map), "{}");

    map.insert("skin_type", "Dry");
    map.insert("age", "Young");
    assert_eq!(format!("{}", map), "{skin_type=Dry, age=Young}");
}

#[test]
fn test_condition_map_common_pairs() {
    let left = common::conditions(&[("skin_type", "Dry"), ("age", "Young")]);
    let right = common::conditions(&[("skin_type", "Dry"), ("age", "Mature")]);

    let shared = left.common_pairs(&right);
    assert_eq!(shared, common::conditions(&[("skin_type", "Dry")]));

    let disjoint = common::conditions(&[("budget", "Low")]);
    assert!(left.common_pairs(&disjoint).is_empty());
}

#[test]
fn test_condition_map_satisfaction() {
    let gate = common::conditions(&[("skin_type", "Dry")]);

    let mut answers = ahash::AHashMap::new();
    assert!(!gate.is_satisfied_by(&answers));

    answers.insert("skin_type".to_string(), "Dry".to_string());
    answers.insert("age".to_string(), "Young".to_string());
    assert!(gate.is_satisfied_by(&answers));

    answers.insert("skin_type".to_string(), "Oily".to_string());
    assert!(!gate.is_satisfied_by(&answers));
}

#[test]
fn test_question_key_derived_from_text() {
    let graph = GraphDefinition::from_json(
        r#"{
            "blocks": {
                "q1": {
                    "type": "question",
                    "question": "How oily is your skin?",
                    "options": ["Very", "Slightly"],
                    "connections": {}
                }
            }
        }"#,
    )
    .expect("Failed to parse");

    let (_, question) = graph.questions().next().expect("Expected a question");
    assert_eq!(question.key, "how_oily_is_your_skin");
}

#[test]
fn test_question_without_text_gets_fallback_key_and_options() {
    let graph = GraphDefinition::from_json(
        r#"{"blocks": {"q1": {"type": "question", "connections": {}}}}"#,
    )
    .expect("Failed to parse");

    let (_, question) = graph.questions().next().expect("Expected a question");
    assert_eq!(question.key, "question");
    assert_eq!(question.options, vec!["Option 1", "Option 2"]);
}

#[test]
fn test_option_text_synthesized_for_out_of_range_index() {
    let graph = GraphDefinition::from_json(
        r#"{
            "blocks": {
                "q1": {
                    "type": "question",
                    "key": "skin_type",
                    "question": "How would you describe your skin?",
                    "options": ["Dry"],
                    "connections": {"5": "r1"}
                }
            }
        }"#,
    )
    .expect("Failed to parse");

    let (_, question) = graph.questions().next().expect("Expected a question");
    assert_eq!(question.option_text(0), "Dry");
    assert_eq!(question.option_text(5), "Option 5");
}

#[test]
fn test_unrecognized_block_type_is_skipped() {
    let graph = GraphDefinition::from_json(
        r#"{
            "blocks": {
                "n1": {"type": "note", "text": "designer comment"},
                "r1": {"type": "result", "label": "Routine"}
            }
        }"#,
    )
    .expect("Failed to parse");

    assert_eq!(graph.blocks.len(), 1);
    assert_eq!(graph.results().count(), 1);
}

#[test]
fn test_result_defaults() {
    let graph = GraphDefinition::from_json(r#"{"blocks": {"r1": {"type": "result"}}}"#)
        .expect("Failed to parse");

    let (_, result) = graph.results().next().expect("Expected a result");
    assert_eq!(result.label, "Result");
    assert_eq!(result.summary, "");
    assert!(result.products.is_empty());
}

#[test]
fn test_error_display() {
    let err = CompileError::PathBudgetExceeded {
        start_id: "q1".to_string(),
        limit: 2,
    };
    assert!(err.to_string().contains("q1"));
    assert!(err.to_string().contains("budget of 2"));

    assert!(
        CompileError::MissingBlocks
            .to_string()
            .contains("'blocks'")
    );

    let run_err = RunError::UnknownAnswer {
        key: "skin_type".to_string(),
        answer: "Sandy".to_string(),
    };
    assert!(run_err.to_string().contains("skin_type"));
    assert!(run_err.to_string().contains("Sandy"));
}
