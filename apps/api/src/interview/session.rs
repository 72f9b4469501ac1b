//! Session State Manager — one interview attempt's questions and progress.
//!
//! Sessions are plain values: handlers pull them out of the store, apply a
//! transition, and put them back. Nothing here touches global state.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::bank;
use crate::interview::evaluator::{AnswerEvaluator, Evaluation};
use crate::interview::InterviewMode;

/// Upper bound on questions sampled into a session.
pub const MAX_QUESTIONS: usize = 5;

/// One in-progress or completed interview attempt.
///
/// Invariant: `scores.len() == feedback.len() == current_index`, and
/// `current_index <= questions.len()`. Only `submit_answer` mutates a
/// session after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub role: String,
    pub mode: InterviewMode,
    pub questions: Vec<String>,
    pub current_index: usize,
    pub scores: Vec<u8>,
    pub feedback: Vec<Evaluation>,
    pub started_at: DateTime<Utc>,
}

/// Result of one answer submission, shaped for the submit-answer response.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub evaluation: Evaluation,
    pub complete: bool,
    pub next_question: Option<String>,
    pub question_number: usize,
    pub total_questions: usize,
}

impl InterviewSession {
    /// Starts a session for a role and mode, sampling up to
    /// [`MAX_QUESTIONS`] questions uniformly without replacement, in random
    /// order. An unknown role in technical mode yields an empty question
    /// list rather than an error.
    ///
    /// The RNG is injected so tests can seed selection deterministically.
    pub fn start<R: Rng + ?Sized>(role: &str, mode: InterviewMode, rng: &mut R) -> Self {
        let bank = bank::questions_for(role, mode);
        let mut questions: Vec<String> = bank.iter().map(|q| q.to_string()).collect();
        questions.shuffle(rng);
        questions.truncate(MAX_QUESTIONS);

        InterviewSession {
            role: role.to_string(),
            mode,
            questions,
            current_index: 0,
            scores: Vec::new(),
            feedback: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// True once every sampled question has been answered. Also true for a
    /// session that started with an empty bank.
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Evaluates an answer to the current question and advances the session.
    ///
    /// Appends exactly one score and one feedback entry, then increments
    /// `current_index`, preserving the session invariant.
    pub fn submit_answer(
        &mut self,
        evaluator: &dyn AnswerEvaluator,
        answer: &str,
    ) -> Result<AnswerOutcome, AppError> {
        if self.is_complete() {
            return Err(AppError::InvalidState("no more questions to answer"));
        }

        let evaluation = evaluator.evaluate(self.mode, answer);
        self.scores.push(evaluation.score);
        self.feedback.push(evaluation.clone());
        self.current_index += 1;

        let complete = self.is_complete();
        let next_question = if complete {
            None
        } else {
            Some(self.questions[self.current_index].clone())
        };

        Ok(AnswerOutcome {
            evaluation,
            complete,
            next_question,
            question_number: self.current_index + 1,
            total_questions: self.questions.len(),
        })
    }
}
