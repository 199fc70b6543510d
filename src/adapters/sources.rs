use crate::common::error::{AppError, ServiceResult};
use crate::models::sources::{RawCommentary, RawMatch};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::error;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[async_trait]
pub trait RawMatchSource: Send + Sync {
    async fn fetch_matches(&self) -> ServiceResult<Vec<RawMatch>>;
}

#[async_trait]
pub trait LiveCommentarySource: Send + Sync {
    async fn fetch_commentary(&self) -> ServiceResult<Vec<RawCommentary>>;
}

/// A JSON document holding a list of raw records, on disk or behind a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    File(PathBuf),
    Http(String),
}

impl FeedLocation {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        match location.starts_with("http://") || location.starts_with("https://") {
            true => FeedLocation::Http(location.to_owned()),
            false => FeedLocation::File(PathBuf::from(location)),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        match self {
            FeedLocation::File(path) => {
                let contents = tokio::fs::read(path).await?;
                Ok(serde_json::from_slice(&contents)?)
            }
            FeedLocation::Http(url) => {
                let response = CLIENT.get(url).send().await?.error_for_status()?;
                Ok(response.json().await?)
            }
        }
    }

    async fn fetch_records<T: DeserializeOwned>(&self) -> ServiceResult<Vec<T>> {
        match self.fetch_json().await {
            Ok(records) => Ok(records),
            Err(e) => {
                error!(location = ?self, "Failed to read feed: {e:?}");
                Err(AppError::SourcesUnavailable)
            }
        }
    }
}

#[async_trait]
impl RawMatchSource for FeedLocation {
    async fn fetch_matches(&self) -> ServiceResult<Vec<RawMatch>> {
        self.fetch_records().await
    }
}

#[async_trait]
impl LiveCommentarySource for FeedLocation {
    async fn fetch_commentary(&self) -> ServiceResult<Vec<RawCommentary>> {
        self.fetch_records().await
    }
}
