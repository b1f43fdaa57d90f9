//! HTTP client for the mail-sending service behind the site forms.
//!
//! Each validated submission is forwarded as one JSON POST. Delivery is
//! fire-and-forget from the site's point of view: a 2xx answer is success,
//! anything else is reported once and never retried.

use std::time::Duration;

use chrono::{DateTime, Utc};
use laundro_core::{ContactForm, FranchiseForm, JobApplication, Submission};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::MailerError;

/// Client for the mail-sending service.
///
/// Use [`MailClient::new`] with the configured endpoint. Tests point it at a
/// wiremock server the same way.
#[derive(Debug, Clone)]
pub struct MailClient {
    client: Client,
    endpoint: Url,
}

/// Body sent to the mail service.
#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    kind: &'static str,
    subject: String,
    reply_to: &'a str,
    submitted_at: DateTime<Utc>,
    fields: FormFields<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FormFields<'a> {
    Contact(&'a ContactForm),
    Franchise(&'a FranchiseForm),
    JobApplication(&'a JobApplication),
}

impl<'a> From<&'a Submission> for FormFields<'a> {
    fn from(submission: &'a Submission) -> Self {
        match submission {
            Submission::Contact(form) => FormFields::Contact(form),
            Submission::Franchise(form) => FormFields::Franchise(form),
            Submission::JobApplication(form) => FormFields::JobApplication(form),
        }
    }
}

impl MailClient {
    /// Creates a client that posts to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute URL, or [`MailerError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MailerError> {
        let endpoint = Url::parse(endpoint).map_err(|e| MailerError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Forwards a submission to the mail service.
    ///
    /// The submission is expected to be validated already.
    ///
    /// # Errors
    ///
    /// - [`MailerError::Http`] on network failure or timeout.
    /// - [`MailerError::UnexpectedStatus`] if the service does not answer 2xx.
    pub async fn send(&self, submission: &Submission) -> Result<(), MailerError> {
        let payload = MailPayload {
            kind: submission.kind(),
            subject: submission.subject(),
            reply_to: submission.reply_to(),
            submitted_at: Utc::now(),
            fields: submission.into(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(kind = payload.kind, error = %e, "mail service unreachable");
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                kind = payload.kind,
                status = status.as_u16(),
                "mail service rejected submission"
            );
            return Err(MailerError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        tracing::info!(kind = payload.kind, "submission forwarded to mail service");
        Ok(())
    }
}
