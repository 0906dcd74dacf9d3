//! Shared types: document formats, lookup outcomes, and the error type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Representation requested from the document-content endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [Self::Text, Self::Html, Self::Json];

    /// File extension used by the upstream content endpoint.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Value of the `Accept` header for this representation.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text | Self::Html => "text/plain, text/html; q=0.9, */*; q=0.8",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = DataportalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
            DataportalError::InvalidQuery(format!(
                "Unknown document format '{s}', expected one of: text, html, json"
            ))
        })
    }
}

/// Outcome of a lookup against an upstream collection.
///
/// `NotFound` means the upstream payload carried no collection at all. It is
/// a normal outcome, distinct from `Found` with an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Error type for all dataportal operations.
#[derive(thiserror::Error, Debug)]
pub enum DataportalError {
    #[error("Invalid document reference: {0}")]
    InvalidReference(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned HTTP {status} for {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl DataportalError {
    /// True for connection, timeout and non-2xx failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DataportalError::Transport { .. } | DataportalError::Status { .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DataportalError::Transport { source, .. } if source.is_timeout())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DataportalError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience result type.
pub type DataportalResult<T> = Result<T, DataportalError>;
