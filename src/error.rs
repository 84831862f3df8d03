// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for pagebot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PagebotError>;

#[derive(Error, Debug)]
pub enum PagebotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unsupported URL scheme '{0}': expected http or https")]
    InvalidScheme(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
