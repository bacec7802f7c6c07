// src/error.rs

use thiserror::Error;

/// Failure modes of the contributor fetch pipeline. The display layer
/// renders all of them the same way: the message lands in the error panel.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
