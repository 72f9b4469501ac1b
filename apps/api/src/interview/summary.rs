//! Summary Aggregator — reduces a session's feedback into a final report.

use serde::{Deserialize, Serialize};

use crate::interview::session::InterviewSession;
use crate::interview::InterviewMode;

/// Overall performance band derived from the mean score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    /// Thresholds on the rounded mean score: ≥4.5 / ≥3.5 / ≥2.5.
    fn from_score(score: f64) -> Self {
        match score {
            s if s >= 4.5 => PerformanceLevel::Excellent,
            s if s >= 3.5 => PerformanceLevel::Good,
            s if s >= 2.5 => PerformanceLevel::Average,
            _ => PerformanceLevel::NeedsImprovement,
        }
    }
}

/// Full session report returned to callers. Derived on demand; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub overall_score: f64,
    pub performance_level: PerformanceLevel,
    pub question_scores: Vec<u8>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<String>,
    pub role: String,
    pub interview_type: InterviewMode,
}

/// Strengths/improvements shown in a report are capped after dedup.
const FEEDBACK_ITEM_LIMIT: usize = 6;

const RECOMMENDATIONS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &[
            "LeetCode practice",
            "System Design Primer",
            "Cracking the Coding Interview",
        ],
    ),
    (
        "Product Manager",
        &[
            "Decode and Conquer",
            "Exponent PM practice",
            "User research guides",
        ],
    ),
    (
        "Data Analyst",
        &[
            "SQL HackerRank",
            "Statistics refresher",
            "Python for Data Analysis",
        ],
    ),
    (
        "DevOps Engineer",
        &["Docker & Kubernetes", "Cloud cert paths", "IaC tutorials"],
    ),
    (
        "UI/UX Designer",
        &[
            "Accessibility guidelines",
            "Usability testing playbook",
            "Figma advanced tutorials",
        ],
    ),
];

const FALLBACK_RECOMMENDATIONS: &[&str] = &["Interview prep resources", "Role-specific practice"];

/// Builds the summary report for a session. Pure read; safe to call at any
/// point in the session lifecycle, including before the first answer.
pub fn summarize(session: &InterviewSession) -> SummaryReport {
    let overall_score = mean_rounded(&session.scores);

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for entry in &session.feedback {
        strengths.extend(entry.strengths.iter().cloned());
        improvements.extend(entry.improvements.iter().cloned());
    }

    SummaryReport {
        overall_score,
        performance_level: PerformanceLevel::from_score(overall_score),
        question_scores: session.scores.clone(),
        strengths: dedup_first(strengths, FEEDBACK_ITEM_LIMIT),
        improvements: dedup_first(improvements, FEEDBACK_ITEM_LIMIT),
        recommendations: recommendations_for(&session.role),
        role: session.role.clone(),
        interview_type: session.mode,
    }
}

/// Arithmetic mean rounded to one decimal; 0.0 for an empty score list.
fn mean_rounded(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(*s)).sum();
    let mean = f64::from(sum) / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Deduplicates preserving first-occurrence order, stopping at `limit`.
fn dedup_first(items: Vec<String>, limit: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(limit);
    for item in items {
        if !out.contains(&item) {
            out.push(item);
            if out.len() == limit {
                break;
            }
        }
    }
    out
}

/// Fixed study resources per known role; generic fallback otherwise.
fn recommendations_for(role: &str) -> Vec<String> {
    RECOMMENDATIONS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, recs)| *recs)
        .unwrap_or(FALLBACK_RECOMMENDATIONS)
        .iter()
        .map(|r| r.to_string())
        .collect()
}
