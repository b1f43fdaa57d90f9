pub mod client;
pub mod error;

pub use client::MailClient;
pub use error::MailerError;
