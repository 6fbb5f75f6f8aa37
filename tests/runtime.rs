//! Tests for the reference quiz walker.
mod common;
use common::*;
use quizflow::prelude::*;

#[test]
fn test_session_walks_the_gated_branch() {
    let quiz = Compiler::builder(branching_graph())
        .build()
        .compile()
        .expect("Failed to compile");
    let mut session = QuizSession::new(&quiz);

    let first = session.current_question().expect("Expected a first question");
    assert_eq!(first.key, "skin_type");
    session.answer("skin_type", "Dry").expect("Failed to answer");

    // The Dry branch unlocks the age question.
    let second = session.current_question().expect("Expected a follow-up");
    assert_eq!(second.key, "age");
    session.answer("age", "Mature").expect("Failed to answer");

    assert!(session.is_complete());
    let outcome = session.outcome().expect("Expected an outcome");
    assert_eq!(outcome.label, "Rich hydration");
}

#[test]
fn test_session_skips_gated_question_on_other_branch() {
    let quiz = Compiler::builder(branching_graph())
        .build()
        .compile()
        .expect("Failed to compile");
    let mut session = QuizSession::new(&quiz);

    session.answer("skin_type", "Oily").expect("Failed to answer");

    // The age question is gated on Dry and must not be offered.
    assert!(session.current_question().is_none());
    let outcome = session.outcome().expect("Expected an outcome");
    assert_eq!(outcome.label, "Oil control");
}

#[test]
fn test_outcome_requires_full_match() {
    let quiz = Compiler::builder(branching_graph())
        .build()
        .compile()
        .expect("Failed to compile");
    let mut session = QuizSession::new(&quiz);

    assert!(session.outcome().is_none());
    session.answer("skin_type", "Dry").expect("Failed to answer");
    // Both Dry rules still need the age answer.
    assert!(session.outcome().is_none());
}

#[test]
fn test_session_rejects_unknown_question_and_answer() {
    let quiz = Compiler::builder(branching_graph())
        .build()
        .compile()
        .expect("Failed to compile");
    let mut session = QuizSession::new(&quiz);

    match session.answer("shoe_size", "42") {
        Err(RunError::UnknownQuestion(key)) => assert_eq!(key, "shoe_size"),
        other => panic!("Expected UnknownQuestion, got {:?}", other),
    }

    match session.answer("skin_type", "Sandy") {
        Err(RunError::UnknownAnswer { key, answer }) => {
            assert_eq!(key, "skin_type");
            assert_eq!(answer, "Sandy");
        }
        other => panic!("Expected UnknownAnswer, got {:?}", other),
    }
}

#[test]
fn test_reset_clears_answers() {
    let quiz = Compiler::builder(single_question_graph())
        .build()
        .compile()
        .expect("Failed to compile");
    let mut session = QuizSession::new(&quiz);

    session.answer("skin_type", "Dry").expect("Failed to answer");
    assert!(session.outcome().is_some());

    session.reset();
    assert!(session.answers().is_empty());
    assert!(session.outcome().is_none());
    assert_eq!(
        session.current_question().map(|q| q.key.as_str()),
        Some("skin_type")
    );
}
