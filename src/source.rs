//! One-shot loading of the profile collection.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{error, info};

use crate::core::{Profile, Result};

/// Where the profile list comes from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Profile>>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// A JSON array of profiles on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Profile>> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A JSON array of profiles served over HTTP(S), read with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProfileSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Profile>> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// HTTP for `http://` and `https://` locations, a file path otherwise.
pub fn source_for(location: &str) -> Box<dyn ProfileSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Fetch once. Failures are logged and yield an empty list; there is no
/// retry.
pub async fn load_or_empty(source: &dyn ProfileSource) -> Vec<Profile> {
    match source.fetch().await {
        Ok(profiles) => {
            info!(source = %source.describe(), count = profiles.len(), "profiles fetched");
            profiles
        }
        Err(err) => {
            error!(source = %source.describe(), error = %err, "error fetching profiles");
            Vec::new()
        }
    }
}
