use std::path::Path;
use std::time::Duration;

use anyhow::Context;

/// Source of first-run data files
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send download request")?
            .error_for_status()
            .context("Download request was rejected")?;

        let body = response.bytes().await.context("Failed to read download body")?;
        Ok(body.to_vec())
    }
}

/// Download `url` to `path` unless the file is already there.
///
/// One attempt, no retry. Failures are logged; the result tells whether the
/// file exists afterwards.
pub async fn ensure_file(fetcher: &dyn Fetcher, path: &Path, url: Option<&str>) -> bool {
    if path.exists() {
        return true;
    }

    let Some(url) = url else {
        tracing::warn!("{} is missing and no download URL is configured", path.display());
        return false;
    };

    tracing::info!("Downloading {} ...", url);
    let bytes = match fetcher.fetch(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to download {}: {:#}", url, e);
            return false;
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            tracing::warn!("Failed to create {}: {}", parent.display(), e);
            return false;
        }
    }

    match tokio::fs::write(path, &bytes).await {
        Ok(()) => {
            tracing::info!("Download complete: {} ({} bytes)", path.display(), bytes.len());
            true
        }
        Err(e) => {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
            false
        }
    }
}
