pub mod app_config;
pub mod branch;
pub mod catalog;
pub mod chatbot;
pub mod config;
pub mod directory;
pub mod filter;
pub mod forms;
pub mod locator;

mod builtin;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use branch::{BranchRecord, Coordinates, Service};
pub use catalog::{builtin_directory, load_directory, BranchCatalog, BranchDirectory, CatalogFile};
pub use chatbot::{reply, ChatRole, ChatTurn, ReplyAction};
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{DirectorySession, Selection, SessionState};
pub use filter::{filter_branches, FilterCriteria};
pub use forms::{
    ContactForm, FieldError, FranchiseForm, JobApplication, Submission, ValidationErrors,
};
pub use locator::LocatorMapping;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while loading a catalog file from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
