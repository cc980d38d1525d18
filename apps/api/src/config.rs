use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workable account subdomain, e.g. `acme` for `acme.workable.com`.
    pub workable_subdomain: String,
    /// Job shortcode used against the authenticated SPI endpoints.
    pub workable_job_shortcode: String,
    /// Job shortcode used against the public apply.workable.com form endpoint.
    /// Usually identical to `workable_job_shortcode`, but configured separately
    /// because the public form is published under its own code.
    pub workable_public_job_shortcode: String,
    pub workable_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let workable_job_shortcode = require_env("WORKABLE_JOB_SHORTCODE")?;

        Ok(Config {
            workable_subdomain: require_env("WORKABLE_SUBDOMAIN")?,
            workable_public_job_shortcode: std::env::var("WORKABLE_PUBLIC_JOB_SHORTCODE")
                .unwrap_or_else(|_| workable_job_shortcode.clone()),
            workable_job_shortcode,
            workable_api_key: require_env("WORKABLE_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
