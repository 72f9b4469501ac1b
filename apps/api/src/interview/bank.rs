//! Question Bank — static per-role technical questions plus the shared
//! behavioral list. Loaded once as compile-time data; read-only.

use super::InterviewMode;

/// Roles the bank knows about, in the order they are presented to clients.
pub const ROLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Analyst",
    "DevOps Engineer",
    "UI/UX Designer",
];

const TECHNICAL_BANKS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &[
            "Explain the difference between stack and queue data structures. When would you use each?",
            "How would you design a system to handle 1 million concurrent users?",
            "What is the time complexity of quicksort? Explain your reasoning.",
            "How would you implement an LRU cache?",
            "Explain the concept of database indexing and its trade-offs.",
        ],
    ),
    (
        "Product Manager",
        &[
            "How would you prioritize features for a mobile app with limited development resources?",
            "Walk me through how you would launch a new product in a competitive market.",
            "How do you measure product success? What metrics would you track?",
            "Describe how you would conduct user research for a B2B product.",
            "How would you handle conflicting requirements from different stakeholders?",
        ],
    ),
    (
        "Data Analyst",
        &[
            "How would you identify and handle outliers in a dataset?",
            "Explain the difference between correlation and causation with examples.",
            "How would you design an A/B test for an e-commerce website?",
            "What statistical methods would you use to predict customer churn?",
            "How do you ensure data quality in your analysis process?",
        ],
    ),
    (
        "DevOps Engineer",
        &[
            "Explain the difference between containers and virtual machines.",
            "How would you implement a CI/CD pipeline for a microservices architecture?",
            "What strategies do you use for monitoring and alerting in production?",
            "How do you handle secrets management in a cloud environment?",
            "Explain Infrastructure as Code and its benefits.",
        ],
    ),
    (
        "UI/UX Designer",
        &[
            "How do you approach designing for accessibility?",
            "Walk me through your design process for a mobile app.",
            "How do you conduct usability testing? What do you look for?",
            "How would you design for both iOS and Android platforms?",
            "How do you balance user needs with business requirements?",
        ],
    ),
];

const BEHAVIORAL_BANK: &[&str] = &[
    "Tell me about a time when you had to work with a difficult team member. How did you handle it?",
    "Describe a situation where you had to meet a tight deadline. What was your approach?",
    "Give me an example of a time when you made a mistake. How did you handle it?",
    "Tell me about a time when you had to learn something new quickly.",
    "Describe a situation where you had to influence someone without direct authority.",
    "Tell me about a project you're particularly proud of. What made it successful?",
    "Describe a time when you had to make a difficult decision with limited information.",
    "Tell me about a time when you had to adapt to a significant change at work.",
];

/// Returns the candidate question bank for a role and mode.
///
/// Technical mode looks the role up in the per-role tables and degrades to an
/// empty slice for an unknown role. Behavioral questions are shared across
/// roles, so the role is ignored in that mode.
pub fn questions_for(role: &str, mode: InterviewMode) -> &'static [&'static str] {
    match mode {
        InterviewMode::Technical => TECHNICAL_BANKS
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, questions)| *questions)
            .unwrap_or(&[]),
        InterviewMode::Behavioral => BEHAVIORAL_BANK,
    }
}
