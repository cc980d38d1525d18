//! Recording fake of the vendor gateway for router-level tests.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::workable::types::{Candidate, FormField, Question, QuestionsResponse};
use crate::workable::VendorGateway;

/// In-memory `VendorGateway` that serves canned responses and records the
/// order of outbound calls, so tests can assert that validation failures and
/// rate limits short-circuit before candidate creation.
pub struct FakeGateway {
    questions: QuestionsResponse,
    candidate_response: (StatusCode, Value),
    form: Vec<FormField>,
    calls: Mutex<Vec<&'static str>>,
    forwarded: Mutex<Option<Candidate>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            questions: QuestionsResponse {
                questions: vec![],
                error: None,
            },
            candidate_response: (StatusCode::OK, json!({})),
            form: vec![],
            calls: Mutex::new(vec![]),
            forwarded: Mutex::new(None),
        }
    }
}

impl FakeGateway {
    pub fn with_questions(mut self, questions: Value) -> Self {
        let questions: Vec<Question> =
            serde_json::from_value(questions).expect("valid question fixture");
        self.questions.questions = questions;
        self
    }

    pub fn with_questions_error(mut self, message: &str) -> Self {
        self.questions.error = Some(message.to_string());
        self
    }

    pub fn with_candidate_response(mut self, status: StatusCode, body: Value) -> Self {
        self.candidate_response = (status, body);
        self
    }

    pub fn with_form(mut self, form: Value) -> Self {
        self.form = serde_json::from_value(form).expect("valid form fixture");
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn forwarded_candidate(&self) -> Option<Candidate> {
        self.forwarded.lock().expect("forwarded lock").clone()
    }
}

#[async_trait]
impl VendorGateway for FakeGateway {
    async fn fetch_questions(&self) -> Result<QuestionsResponse, AppError> {
        self.calls.lock().expect("calls lock").push("fetch_questions");
        Ok(self.questions.clone())
    }

    async fn create_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<(StatusCode, Value), AppError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push("create_candidate");
        *self.forwarded.lock().expect("forwarded lock") = Some(candidate.clone());
        Ok(self.candidate_response.clone())
    }

    async fn fetch_form(&self) -> Result<Vec<FormField>, AppError> {
        self.calls.lock().expect("calls lock").push("fetch_form");
        Ok(self.form.clone())
    }
}
