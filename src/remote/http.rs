//! Client for the words.dev-apis.com word game API

use super::{ServiceError, WordOfDaySource, WordValidator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct WordOfDayResponse {
    word: Option<String>,
    #[serde(rename = "puzzleNumber", default)]
    puzzle_number: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ValidateWordRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateWordResponse {
    #[serde(rename = "validWord", default)]
    valid_word: bool,
}

/// HTTP client for `GET /word-of-the-day` and `POST /validate-word`
#[derive(Debug, Clone)]
pub struct DevApiClient {
    http: Client,
    base_url: String,
}

impl DevApiClient {
    /// # Errors
    /// Returns `ServiceError::Http` if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch today's word as returned by the server (not yet normalised)
    ///
    /// # Errors
    /// Returns `ServiceError::Http` on transport failure, non-success status
    /// or an undecodable body, and `ServiceError::MissingWord` if the body has
    /// no `word` field.
    pub async fn word_of_the_day(&self) -> Result<String, ServiceError> {
        let res = self
            .http
            .get(format!("{}/word-of-the-day", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let body: WordOfDayResponse = res.json().await?;
        debug!(puzzle = ?body.puzzle_number, "word of the day received");
        body.word
            .filter(|w| !w.is_empty())
            .ok_or(ServiceError::MissingWord)
    }

    /// Ask the dictionary whether `word` is valid
    ///
    /// # Errors
    /// Returns `ServiceError::Http` on transport failure, non-success status
    /// or an undecodable body.
    pub async fn check_word(&self, word: &str) -> Result<bool, ServiceError> {
        let word = word.to_ascii_lowercase();
        let res = self
            .http
            .post(format!("{}/validate-word", self.base_url))
            .json(&ValidateWordRequest { word: &word })
            .send()
            .await?
            .error_for_status()?;
        let body: ValidateWordResponse = res.json().await?;
        Ok(body.valid_word)
    }
}

#[async_trait]
impl WordOfDaySource for DevApiClient {
    async fn fetch(&self) -> Result<String, ServiceError> {
        self.word_of_the_day().await
    }
}

#[async_trait]
impl WordValidator for DevApiClient {
    async fn validate(&self, word: &str) -> bool {
        match self.check_word(word).await {
            Ok(valid) => valid,
            Err(err) => {
                warn!(word, error = %err, "word validation failed, treating as invalid");
                false
            }
        }
    }
}
