// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("authentication against the CAS login service failed")]
    AuthenticationFailed,
    #[error("unexpected page structure: {0}")]
    UnexpectedPageStructure(String),
    #[error("malformed Content-Disposition header: {0:?}")]
    MalformedDisposition(String),
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error in config file: {0}")]
    Config(String),
    #[error("syntax error in config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
