//! Wire types for the Workable API surfaces this proxy touches.
//!
//! Two identifier schemes are in play: the public `/form` endpoint describes
//! fields under one scheme, while the authenticated SPI `/questions` endpoint
//! returns the ids that `POST /candidates` actually accepts. The submission
//! path reconciles the two (see `submission::remap`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Question type as reported by the SPI questions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    FreeText,
    MultipleChoice,
    Boolean,
    Dropdown,
    Numeric,
    Date,
    File,
    /// Kinds Workable may add without notice. Never choice-remapped.
    #[serde(other)]
    Unknown,
}

impl QuestionKind {
    /// Only these kinds carry answer choices that need id remapping.
    pub fn uses_choice_ids(self) -> bool {
        matches!(self, QuestionKind::MultipleChoice | QuestionKind::Dropdown)
    }
}

/// One selectable option of a choice-type question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub id: String,
    pub body: String,
}

/// Authoritative question record from `GET /spi/v3/jobs/{shortcode}/questions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_answer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

/// Envelope of the questions endpoint. Workable signals rate limiting with an
/// `error` field in the body rather than an HTTP 429.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A candidate's response to one form question. The form posts plain label
/// strings; `question_key` and choice ids are attached by the remap step.
/// Unknown keys are carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Answer {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full submission payload. Profile fields (name, email, image_url,
/// resume_url, ...) are opaque to the proxy and forwarded verbatim; only
/// `answers` is rewritten.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Candidate {
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// One entry of the public form schema from
/// `GET https://apply.workable.com/api/v1/jobs/{shortcode}/form`.
/// Consumed only by the renderer; the proxy hands it through unchanged.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FormFieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_option: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    /// `group` fields nest their children here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FormField>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormFieldOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
