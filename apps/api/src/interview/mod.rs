// Interview core: question bank, answer evaluation, session state, summary.
// Handlers are the only HTTP-aware code here — everything else is pure.

pub mod bank;
pub mod evaluator;
pub mod handlers;
pub mod session;
pub mod summary;

use serde::{Deserialize, Serialize};

/// Interview mode chosen at session start. Drives both question selection
/// and which evaluation heuristic scores the answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    #[default]
    Technical,
    Behavioral,
}
