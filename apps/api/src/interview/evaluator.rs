//! Answer Evaluation — pluggable, trait-based scorer for free-text answers.
//!
//! Default: `KeywordEvaluator` (pure-Rust, fast, deterministic, fully
//! testable). The keyword heuristics stand in for semantic evaluation; a
//! future backend can swap in without touching the handlers.
//!
//! `AppState` holds an `Arc<dyn AnswerEvaluator>`.

use serde::{Deserialize, Serialize};

use super::InterviewMode;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all evaluator backends)
// ────────────────────────────────────────────────────────────────────────────

/// Scored feedback for a single answer. `feedback` carries the fixed
/// per-mode evaluation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u8, // 1 – 5
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The answer evaluator trait. Implement this to swap scoring backends
/// without touching the session or handler code.
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, mode: InterviewMode, answer: &str) -> Evaluation;
}

/// Default keyword-heuristic evaluator. No hidden state; output depends
/// only on the answer text.
pub struct KeywordEvaluator;

impl AnswerEvaluator for KeywordEvaluator {
    fn evaluate(&self, mode: InterviewMode, answer: &str) -> Evaluation {
        match mode {
            InterviewMode::Technical => evaluate_technical(answer),
            InterviewMode::Behavioral => evaluate_behavioral(answer),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Technical heuristic
// ────────────────────────────────────────────────────────────────────────────

/// Word count at which an answer counts as a comprehensive explanation.
const LONG_ANSWER_WORDS: usize = 80;

/// Depth signals — complexity analysis, optimization, systems trade-offs.
const DEPTH_KEYWORDS: &[&str] = &[
    "time complexity",
    "big-o",
    "o(",
    "optimiz",
    "scalab",
    "trade-off",
    "cache",
    "index",
];

/// Broader fundamentals, checked only when no depth keyword matched.
const BREADTH_KEYWORDS: &[&str] = &["algorithm", "data structure", "testing", "example"];

/// Step indicators — the answer walks through an ordered approach.
const STEP_KEYWORDS: &[&str] = &["first", "then", "finally", "step "];

const TECHNICAL_FEEDBACK: &str = "Technical evaluation based on accuracy, structure, and depth";

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Scores a technical answer.
///
/// Starts at 1 and adds: +1 for ≥80 words, +2 for a depth keyword (or +1
/// for a breadth keyword — first match wins, never both), +1 for a step
/// indicator. Capped at 5. A missing "example" only adds an improvement.
pub fn evaluate_technical(answer: &str) -> Evaluation {
    let lower = answer.to_lowercase();
    let mut score: u8 = 1;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if answer.split_whitespace().count() >= LONG_ANSWER_WORDS {
        score += 1;
        strengths.push("Comprehensive explanation".to_string());
    } else {
        improvements.push("Add more detail and depth".to_string());
    }

    if contains_any(&lower, DEPTH_KEYWORDS) {
        score += 2;
        strengths.push("Good technical concepts referenced".to_string());
    } else if contains_any(&lower, BREADTH_KEYWORDS) {
        score += 1;
        strengths.push("Solid technical understanding".to_string());
    }

    if contains_any(&lower, STEP_KEYWORDS) {
        score += 1;
        strengths.push("Clear structure".to_string());
    } else {
        improvements.push("Organize answer into steps".to_string());
    }

    if !lower.contains("example") {
        improvements.push("Include a concrete example".to_string());
    }

    Evaluation {
        score: score.min(5),
        strengths,
        improvements,
        feedback: TECHNICAL_FEEDBACK.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Behavioral heuristic (STAR method)
// ────────────────────────────────────────────────────────────────────────────

/// STAR dimensions with their presence keywords. Note "i " in Action — a
/// first-person verb phrase counts as describing what the candidate did.
const STAR_DIMENSIONS: &[(&str, &[&str])] = &[
    ("Situation", &["situation", "context", "background"]),
    ("Task", &["task", "responsib", "goal", "objective"]),
    (
        "Action",
        &["i ", "decid", "led", "implemented", "created", "organized"],
    ),
    (
        "Result",
        &["result", "outcome", "impact", "increased", "decreased", "%"],
    ),
];

const BEHAVIORAL_FEEDBACK: &str = "Behavioral evaluation using STAR method";

/// Scores a behavioral answer against the STAR method.
///
/// +1 per dimension present, +1 for any digit (quantified outcome),
/// clamped to [1, 5].
pub fn evaluate_behavioral(answer: &str) -> Evaluation {
    let lower = answer.to_lowercase();
    let mut score: u8 = 1;
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for (dimension, keywords) in STAR_DIMENSIONS {
        if contains_any(&lower, keywords) {
            score += 1;
            strengths.push(format!("{dimension} described"));
        } else {
            improvements.push(format!(
                "Add {} details to complete STAR",
                dimension.to_lowercase()
            ));
        }
    }

    if lower.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
        strengths.push("Quantified results".to_string());
    } else {
        improvements.push("Quantify outcomes where possible".to_string());
    }

    Evaluation {
        score: score.clamp(1, 5),
        strengths,
        improvements,
        feedback: BEHAVIORAL_FEEDBACK.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_lru_cache_answer() {
        let eval = evaluate_technical(
            "I used an LRU cache, first checking access, then evicting the oldest example.",
        );
        assert!(eval
            .strengths
            .contains(&"Good technical concepts referenced".to_string()));
        assert!(eval.strengths.contains(&"Clear structure".to_string()));
        assert!(!eval
            .improvements
            .contains(&"Include a concrete example".to_string()));
        // 1 base + 2 depth + 1 structure; under 80 words
        assert_eq!(eval.score, 4);
    }

    #[test]
    fn test_technical_empty_answer_scores_minimum() {
        let eval = evaluate_technical("");
        assert_eq!(eval.score, 1);
        assert!(eval.strengths.is_empty());
        assert!(eval
            .improvements
            .contains(&"Add more detail and depth".to_string()));
        assert!(eval
            .improvements
            .contains(&"Organize answer into steps".to_string()));
        assert!(eval
            .improvements
            .contains(&"Include a concrete example".to_string()));
    }

    #[test]
    fn test_technical_depth_beats_breadth() {
        // "cache" (depth) and "algorithm" (breadth) both present — only the
        // depth strength may be awarded.
        let eval = evaluate_technical("The algorithm uses a cache.");
        assert!(eval
            .strengths
            .contains(&"Good technical concepts referenced".to_string()));
        assert!(!eval
            .strengths
            .contains(&"Solid technical understanding".to_string()));
    }

    #[test]
    fn test_technical_breadth_keyword_adds_one() {
        let eval = evaluate_technical("Testing matters.");
        assert!(eval
            .strengths
            .contains(&"Solid technical understanding".to_string()));
        assert_eq!(eval.score, 2);
    }

    #[test]
    fn test_technical_long_answer_gets_comprehensive_strength() {
        let answer = "word ".repeat(80);
        let eval = evaluate_technical(&answer);
        assert!(eval
            .strengths
            .contains(&"Comprehensive explanation".to_string()));
        assert!(!eval
            .improvements
            .contains(&"Add more detail and depth".to_string()));
    }

    #[test]
    fn test_technical_score_capped_at_five() {
        // All bonuses at once: 1 + 1 (length) + 2 (depth) + 1 (structure) = 5.
        let mut answer = "First we measure the time complexity, then we optimize the cache, \
                          finally we add an index as a concrete example. "
            .repeat(4);
        answer.push_str(&"padding ".repeat(40));
        let eval = evaluate_technical(&answer);
        assert_eq!(eval.score, 5);
    }

    #[test]
    fn test_technical_example_suppresses_example_improvement() {
        let eval = evaluate_technical("For example, a queue.");
        assert!(!eval
            .improvements
            .contains(&"Include a concrete example".to_string()));
    }

    #[test]
    fn test_behavioral_star_answer() {
        let eval = evaluate_behavioral("I led a project that increased revenue by 20%.");
        assert!(eval.strengths.contains(&"Action described".to_string()));
        assert!(eval.strengths.contains(&"Result described".to_string()));
        assert!(eval.strengths.contains(&"Quantified results".to_string()));
        assert!(eval
            .improvements
            .contains(&"Add situation details to complete STAR".to_string()));
        assert!(eval
            .improvements
            .contains(&"Add task details to complete STAR".to_string()));
        assert_eq!(eval.score, 4);
    }

    #[test]
    fn test_behavioral_full_star_clamps_to_five() {
        let eval = evaluate_behavioral(
            "The situation was a missed deadline. My task was clear: I decided to act, \
             and the result was a 30% improvement.",
        );
        // 1 base + 4 dimensions + 1 digits = 6, clamped
        assert_eq!(eval.score, 5);
        assert_eq!(eval.strengths.len(), 5);
        assert!(eval.improvements.is_empty());
    }

    #[test]
    fn test_behavioral_empty_answer_scores_minimum() {
        let eval = evaluate_behavioral("");
        assert_eq!(eval.score, 1);
        assert_eq!(eval.improvements.len(), 5);
        assert!(eval
            .improvements
            .contains(&"Quantify outcomes where possible".to_string()));
    }

    #[test]
    fn test_behavioral_digit_detection() {
        let with_digit = evaluate_behavioral("We shipped 3 features.");
        assert!(with_digit
            .strengths
            .contains(&"Quantified results".to_string()));

        let without_digit = evaluate_behavioral("We shipped some features.");
        assert!(without_digit
            .improvements
            .contains(&"Quantify outcomes where possible".to_string()));
    }

    #[test]
    fn test_behavioral_matching_is_case_insensitive() {
        let eval = evaluate_behavioral("THE SITUATION WAS DIFFICULT.");
        assert!(eval.strengths.contains(&"Situation described".to_string()));
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let samples = [
            "",
            "short",
            &"very long answer with cache index optimization ".repeat(30),
            "situation task i led result 12345 %",
        ];
        for answer in samples {
            let t = evaluate_technical(answer);
            let b = evaluate_behavioral(answer);
            assert!((1..=5).contains(&t.score), "technical score {}", t.score);
            assert!((1..=5).contains(&b.score), "behavioral score {}", b.score);
        }
    }

    #[test]
    fn test_keyword_evaluator_dispatches_by_mode() {
        let evaluator = KeywordEvaluator;
        let technical = evaluator.evaluate(InterviewMode::Technical, "answer");
        assert_eq!(technical.feedback, TECHNICAL_FEEDBACK);
        let behavioral = evaluator.evaluate(InterviewMode::Behavioral, "answer");
        assert_eq!(behavioral.feedback, BEHAVIORAL_FEEDBACK);
    }
}
