//! Workable client — the single point of entry for all Workable API calls.
//!
//! ARCHITECTURAL RULE: no other module may call Workable directly. Handlers
//! depend on the `VendorGateway` trait, carried in `AppState` as
//! `Arc<dyn VendorGateway>`, so tests can substitute a fake without touching
//! the routing or handler code.

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;

#[cfg(test)]
pub mod testing;
pub mod types;

pub use types::{Answer, Candidate, FormField, Question, QuestionsResponse};

/// Base host of the public (unauthenticated scheme) form endpoint.
const PUBLIC_FORM_HOST: &str = "https://apply.workable.com";

/// Outbound calls the submission flow and the form loader need.
#[async_trait]
pub trait VendorGateway: Send + Sync {
    /// `GET /spi/v3/jobs/{shortcode}/questions` — authoritative question ids.
    async fn fetch_questions(&self) -> Result<QuestionsResponse, AppError>;

    /// `POST /spi/v3/jobs/{shortcode}/candidates` — forwards the candidate and
    /// returns the vendor's status and JSON body verbatim for relaying.
    async fn create_candidate(&self, candidate: &Candidate)
        -> Result<(StatusCode, Value), AppError>;

    /// `GET apply.workable.com/api/v1/jobs/{shortcode}/form` — public field
    /// schema, ordered as the vendor returns it.
    async fn fetch_form(&self) -> Result<Vec<FormField>, AppError>;
}

/// Production gateway backed by a shared `reqwest::Client`.
///
/// Deliberately carries no retry or backoff logic: a rate-limited questions
/// fetch is reported to the caller (429) and the browser retries, not us.
#[derive(Clone)]
pub struct WorkableClient {
    client: Client,
    subdomain: String,
    job_shortcode: String,
    public_job_shortcode: String,
    api_key: String,
}

impl WorkableClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            subdomain: config.workable_subdomain.clone(),
            job_shortcode: config.workable_job_shortcode.clone(),
            public_job_shortcode: config.workable_public_job_shortcode.clone(),
            api_key: config.workable_api_key.clone(),
        }
    }

    fn spi_url(&self, resource: &str) -> String {
        format!(
            "https://{}.workable.com/spi/v3/jobs/{}/{resource}",
            self.subdomain, self.job_shortcode
        )
    }
}

#[async_trait]
impl VendorGateway for WorkableClient {
    async fn fetch_questions(&self) -> Result<QuestionsResponse, AppError> {
        let response = self
            .client
            .get(self.spi_url("questions"))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .send()
            .await?;

        let questions: QuestionsResponse = response.json().await?;
        debug!(count = questions.questions.len(), "Fetched vendor questions");
        Ok(questions)
    }

    async fn create_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<(StatusCode, Value), AppError> {
        let response = self
            .client
            .post(self.spi_url("candidates"))
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .json(candidate)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        debug!(%status, "Vendor candidate creation responded");
        Ok((status, body))
    }

    async fn fetch_form(&self) -> Result<Vec<FormField>, AppError> {
        let url = format!(
            "{PUBLIC_FORM_HOST}/api/v1/jobs/{}/form",
            self.public_job_shortcode
        );

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .send()
            .await?;

        let form: Vec<FormField> = response.json().await?;
        debug!(fields = form.len(), "Fetched public form schema");
        Ok(form)
    }
}
