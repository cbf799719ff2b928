//! Answer submission boundary: prepare a raw answer and build the JSON request for it.
//!
//! Transport is left to the caller; this module only produces method, URL and body.

use serde::{Deserialize, Serialize};

use crate::core::canonicalize::canonicalize;
use crate::core::config::Config;
use crate::core::input_mode::{InputMode, save_input_mode};
use crate::core::persistence::{PreferenceError, PreferenceStore};

pub const CHECK_ANSWER_PATH: &str = "/problems/check";
pub const PLACEMENT_ANSWER_PATH: &str = "/placement/answer";

/// Errors preparing a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Answer is empty")]
    EmptyAnswer,
    #[error("Failed to encode request: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub student_id: String,
    pub session_id: String,
    pub problem_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementAnswerRequest {
    pub student_id: String,
    pub problem_id: String,
    pub answer: String,
}

/// A fully built request, ready for any HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: &'static str,
    pub url: String,
    pub body: serde_json::Value,
}

/// Answer entry state: the mode is injected at construction, read once from preferences.
#[derive(Debug, Clone, Copy)]
pub struct AnswerInput {
    mode: InputMode,
}

impl AnswerInput {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Trim, reject empty input, and canonicalize when in math mode.
    pub fn prepare(&self, raw: &str) -> Result<String, SubmissionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SubmissionError::EmptyAnswer);
        }
        let answer = match self.mode {
            InputMode::Math => canonicalize(trimmed),
            InputMode::Text => trimmed.to_string(),
        };
        // Canonicalization can erase everything, e.g. a lone `\,`.
        if answer.is_empty() {
            return Err(SubmissionError::EmptyAnswer);
        }
        Ok(answer)
    }

    /// Switch between math and text entry and persist the new mode.
    pub fn toggle_mode(
        &mut self,
        store: &mut dyn PreferenceStore,
    ) -> Result<InputMode, PreferenceError> {
        let next = self.mode.toggled();
        save_input_mode(store, next)?;
        self.mode = next;
        Ok(next)
    }
}

fn endpoint(config: &Config, path: &str) -> String {
    format!("{}{}", config.api_base, path)
}

fn post<T: Serialize>(config: &Config, path: &str, body: &T) -> Result<ApiRequest, SubmissionError> {
    Ok(ApiRequest {
        method: "POST",
        url: endpoint(config, path),
        body: serde_json::to_value(body)?,
    })
}

/// Request for checking a practice answer. `answer` must already be prepared.
pub fn check_answer_request(
    config: &Config,
    request: &CheckAnswerRequest,
) -> Result<ApiRequest, SubmissionError> {
    post(config, CHECK_ANSWER_PATH, request)
}

/// Request for answering a placement question. `answer` must already be prepared.
pub fn placement_answer_request(
    config: &Config,
    request: &PlacementAnswerRequest,
) -> Result<ApiRequest, SubmissionError> {
    post(config, PLACEMENT_ANSWER_PATH, request)
}
