//! Word-of-the-day and dictionary services
//!
//! The session only sees the two capability traits. `http` talks to the
//! words.dev-apis.com protocol; `offline` answers from the embedded word lists.

pub mod http;
pub mod offline;

use crate::config::{Settings, SourceKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub use http::DevApiClient;
pub use offline::EmbeddedWords;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response did not contain a word")]
    MissingWord,
    #[error("word list is empty")]
    EmptyWordList,
}

/// Supplies the target word for a new game
#[async_trait]
pub trait WordOfDaySource: Send + Sync {
    async fn fetch(&self) -> Result<String, ServiceError>;
}

/// Case-insensitive dictionary membership
///
/// Implementations report failures as `false`; a guess that cannot be
/// checked is rejected, never accepted.
#[async_trait]
pub trait WordValidator: Send + Sync {
    async fn validate(&self, word: &str) -> bool;
}

/// The pair of services a frontend plays against
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn WordOfDaySource>,
    pub validator: Arc<dyn WordValidator>,
}

impl Services {
    /// Build the services selected by `settings`
    ///
    /// # Errors
    /// Returns `ServiceError::Http` if the HTTP client cannot be constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        match settings.source {
            SourceKind::Remote => {
                let client = Arc::new(DevApiClient::new(
                    &settings.api_base_url,
                    settings.request_timeout,
                )?);
                Ok(Self {
                    source: client.clone(),
                    validator: client,
                })
            }
            SourceKind::Offline => Ok(Self::offline()),
        }
    }

    /// Services backed by the embedded word lists
    #[must_use]
    pub fn offline() -> Self {
        let words = Arc::new(EmbeddedWords::standard());
        Self {
            source: words.clone(),
            validator: words,
        }
    }
}
