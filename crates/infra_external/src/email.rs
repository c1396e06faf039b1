//! Transactional email client
//!
//! Speaks the Resend-style JSON API: one POST per message with sender,
//! recipient, subject, and HTML body. Delivery is best-effort by
//! contract; the resolution pipeline logs failures and moves on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use domain_claims::{ClaimError, ClaimResolved, ResolutionSubscriber};

use crate::error::ExternalError;

/// Email transport configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// API endpoint accepting the message POST
    pub api_url: String,
    /// Bearer token for the email service
    pub api_key: String,
    /// Sender identity, e.g. `Lost Realm <noreply@campus.edu>`
    pub from: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.resend.com/emails".to_string(),
            api_key: String::new(),
            from: "Lost Realm <onboarding@tradenexusonline.com>".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Serialize)]
struct EmailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// HTTP client for the transactional email service
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: Client,
    config: EmailConfig,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Result<Self, ExternalError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Sends one HTML email
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ExternalError> {
        let message = EmailMessage {
            from: &self.config.from,
            to,
            subject,
            html,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExternalError::Status { status, body });
        }

        info!(to, subject, "email dispatched");
        Ok(())
    }
}

/// Resolution subscriber delivering the outcome email to the claimer
#[derive(Debug, Clone)]
pub struct ResolutionEmailSubscriber {
    client: EmailClient,
}

impl ResolutionEmailSubscriber {
    pub fn new(client: EmailClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResolutionSubscriber for ResolutionEmailSubscriber {
    fn name(&self) -> &'static str {
        "outcome-email"
    }

    async fn on_claim_resolved(&self, event: &ClaimResolved) -> Result<(), ClaimError> {
        self.client
            .send(
                &event.claimer_email,
                &event.email_subject(),
                &event.email_body(),
            )
            .await
            .map_err(ClaimError::store)
    }
}
