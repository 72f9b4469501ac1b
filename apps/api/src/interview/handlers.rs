use axum::{
    extract::State,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap,
    },
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::bank;
use crate::interview::session::InterviewSession;
use crate::interview::summary::{summarize, SummaryReport};
use crate::interview::InterviewMode;
use crate::state::AppState;

pub const SESSION_COOKIE_NAME: &str = "interview_session";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewBody {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub interview_type: InterviewMode,
}

#[derive(Serialize)]
pub struct StartInterviewResponse {
    pub success: bool,
    pub question: Vec<String>,
    pub question_number: usize,
    pub total_questions: usize,
}

#[derive(Deserialize)]
pub struct SubmitAnswerBody {
    #[serde(default)]
    pub answer: String,
}

#[derive(Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub complete: bool,
    pub evaluation: crate::interview::evaluator::Evaluation,
    pub next_question: Option<String>,
    pub question_number: usize,
    pub total_questions: usize,
}

/// POST /api/start-interview
///
/// Starts a fresh session for the caller, replacing any previous one, and
/// hands back the sampled questions plus a session cookie.
pub async fn start_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<StartInterviewBody>,
) -> Result<impl IntoResponse, AppError> {
    // A new interview supersedes the caller's old one; drop it eagerly so
    // abandoned sessions don't pile up in the store.
    if let Some(old_token) = session_token(&headers) {
        state.sessions.remove(old_token);
    }

    let session = InterviewSession::start(&body.role, body.interview_type, &mut rand::thread_rng());
    tracing::info!(
        role = %body.role,
        mode = ?body.interview_type,
        questions = session.questions.len(),
        "interview session started"
    );

    let response = StartInterviewResponse {
        success: true,
        question: session.questions.clone(),
        question_number: 1,
        total_questions: session.questions.len(),
    };

    let token = state.sessions.insert(session);
    let cookie = session_cookie(token, state.config.secure_cookies);

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(response)))
}

/// POST /api/submit-answer
///
/// Scores the answer to the current question and advances the session.
pub async fn submit_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SubmitAnswerBody>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    let token = session_token(&headers).ok_or(AppError::InvalidState("no active interview"))?;

    let outcome = state
        .sessions
        .with_session(token, |session| {
            session.submit_answer(state.evaluator.as_ref(), &body.answer)
        })
        .ok_or(AppError::InvalidState("no active interview"))??;

    if outcome.complete {
        tracing::info!(questions = outcome.total_questions, "interview complete");
    }

    Ok(Json(SubmitAnswerResponse {
        success: true,
        complete: outcome.complete,
        evaluation: outcome.evaluation,
        next_question: outcome.next_question,
        question_number: outcome.question_number,
        total_questions: outcome.total_questions,
    }))
}

/// GET /api/get-summary
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SummaryReport>, AppError> {
    let token = session_token(&headers).ok_or(AppError::InvalidState("no active interview"))?;
    let session = state
        .sessions
        .get(token)
        .ok_or(AppError::InvalidState("no active interview"))?;

    Ok(Json(summarize(&session)))
}

/// GET /api/roles
/// The known roles, in presentation order, for client role pickers.
pub async fn list_roles() -> Json<Value> {
    Json(json!({ "roles": bank::ROLES }))
}

/// Pulls the session token out of the request's Cookie header.
fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE_NAME {
            value.parse().ok()
        } else {
            None
        }
    })
}

fn session_cookie(token: Uuid, secure: bool) -> String {
    let secure_attr = if secure { " Secure;" } else { "" };
    format!("{SESSION_COOKIE_NAME}={token}; HttpOnly;{secure_attr} Max-Age=3600; Path=/; SameSite=Strict")
}
