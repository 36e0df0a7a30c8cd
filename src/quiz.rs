use crate::error::ApiError;
use crate::model::{AnswerSubmission, ModuleId, Question, QuestionId, QuizResult};
use std::collections::BTreeMap;

/// Selected option index per question for one attempt.
pub type AnswerSet = BTreeMap<QuestionId, usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum QuizPhase {
    Answering,
    Submitting,
    Result(QuizResult),
}

/// State of one module's quiz: `Answering → Submitting → Result`, and back
/// to `Answering` only through [`QuizEngine::reset`].
#[derive(Debug, Clone)]
pub struct QuizEngine {
    module_id: ModuleId,
    questions: Vec<Question>,
    answers: AnswerSet,
    phase: QuizPhase,
}

impl QuizEngine {
    pub fn new(module_id: ModuleId, questions: Vec<Question>) -> Self {
        Self {
            module_id,
            questions,
            answers: AnswerSet::new(),
            phase: QuizPhase::Answering,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn selected(&self, question_id: QuestionId) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, QuizPhase::Submitting)
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.phase {
            QuizPhase::Result(result) => Some(result),
            QuizPhase::Answering | QuizPhase::Submitting => None,
        }
    }

    /// Records a selection. Last write wins; ignored outside `Answering`
    /// or for unknown questions and out-of-range options.
    pub fn select(&mut self, question_id: QuestionId, option: usize) -> bool {
        if !matches!(self.phase, QuizPhase::Answering) {
            return false;
        }
        let valid = self
            .questions
            .iter()
            .any(|q| q.id == question_id && option < q.options.len());
        if valid {
            self.answers.insert(question_id, option);
        }
        valid
    }

    pub fn all_answered(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, QuizPhase::Answering) && self.all_answered()
    }

    /// Moves to `Submitting` and returns the payload to send, or `None` if
    /// the quiz is incomplete or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Vec<AnswerSubmission>> {
        if !self.can_submit() {
            return None;
        }
        self.phase = QuizPhase::Submitting;
        Some(
            self.answers
                .iter()
                .map(|(&question_id, &selected_index)| AnswerSubmission {
                    question_id,
                    selected_index,
                })
                .collect(),
        )
    }

    /// Applies the backend's reply. On failure the answers are kept and the
    /// error is handed back so the caller can report it.
    pub fn finish_submit(&mut self, outcome: Result<QuizResult, ApiError>) -> Result<(), ApiError> {
        if !self.is_submitting() {
            log::warn!(
                "Discarding quiz reply for module {} with no submission in flight",
                self.module_id
            );
            return Ok(());
        }
        match outcome {
            Ok(result) => {
                self.phase = QuizPhase::Result(result);
                Ok(())
            }
            Err(err) => {
                self.phase = QuizPhase::Answering;
                Err(err)
            }
        }
    }

    /// "Try Again": only valid from `Result`.
    pub fn reset(&mut self) {
        if matches!(self.phase, QuizPhase::Result(_)) {
            self.answers.clear();
            self.phase = QuizPhase::Answering;
        }
    }
}
