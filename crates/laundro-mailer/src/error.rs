use thiserror::Error;

/// Errors returned while forwarding a submission to the mail service.
#[derive(Debug, Error)]
pub enum MailerError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail service answered with a non-2xx status.
    #[error("mail service returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("invalid mail endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
