use crate::artifact::{CompiledQuestion, CompiledQuiz, CompiledRule};
use crate::error::RunError;
use ahash::AHashMap;

/// Walks a compiled quiz the way the chat runtime does.
///
/// Questions are offered in artifact order, each gated by its `show_if`
/// against the answers accumulated so far. Once no further question is
/// offerable, the first rule whose `if` map is fully satisfied decides
/// the outcome.
///
/// A session borrows the quiz, so one compiled quiz can serve any number
/// of concurrent sessions.
pub struct QuizSession<'a> {
    quiz: &'a CompiledQuiz,
    answers: AHashMap<String, String>,
}

impl<'a> QuizSession<'a> {
    pub fn new(quiz: &'a CompiledQuiz) -> Self {
        Self {
            quiz,
            answers: AHashMap::new(),
        }
    }

    /// The answers recorded so far, keyed by question key.
    pub fn answers(&self) -> &AHashMap<String, String> {
        &self.answers
    }

    /// Records an answer. The question must exist and must offer the
    /// given option text.
    pub fn answer(&mut self, key: &str, option_text: &str) -> Result<(), RunError> {
        let question = self
            .quiz
            .questions
            .iter()
            .find(|q| q.key == key)
            .ok_or_else(|| RunError::UnknownQuestion(key.to_string()))?;
        if !question.options.iter().any(|option| option == option_text) {
            return Err(RunError::UnknownAnswer {
                key: key.to_string(),
                answer: option_text.to_string(),
            });
        }
        self.answers
            .insert(key.to_string(), option_text.to_string());
        Ok(())
    }

    /// The next question to ask: the first one, in artifact order, that is
    /// unanswered and whose gate is satisfied. `None` when the session has
    /// run out of askable questions.
    pub fn current_question(&self) -> Option<&'a CompiledQuestion> {
        self.quiz.questions.iter().find(|question| {
            !self.answers.contains_key(&question.key)
                && question
                    .show_if
                    .as_ref()
                    .is_none_or(|gate| gate.is_satisfied_by(&self.answers))
        })
    }

    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    /// The first rule fully satisfied by the recorded answers, if any.
    pub fn outcome(&self) -> Option<&'a CompiledRule> {
        self.quiz
            .rules
            .iter()
            .find(|rule| rule.conditions.is_satisfied_by(&self.answers))
    }

    /// Discards all recorded answers.
    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
