use std::sync::atomic::{AtomicUsize, Ordering};

use crate::download::{Fetcher, ensure_file};

struct FakeFetcher {
    body: Option<&'static str>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    fn serving(body: &'static str) -> Self {
        Self {
            body: Some(body),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.body {
            Some(body) => Ok(body.as_bytes().to_vec()),
            None => anyhow::bail!("connection refused: {url}"),
        }
    }
}

#[tokio::test]
async fn test_downloads_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("cedict_ts.u8");
    let fetcher = FakeFetcher::serving("人 人 [ren2] /person/\n");

    assert!(ensure_file(&fetcher, &path, Some("https://example.invalid/cedict")).await);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "人 人 [ren2] /person/\n");
}

#[tokio::test]
async fn test_existing_file_is_not_fetched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cedict_ts.u8");
    std::fs::write(&path, "local").unwrap();
    let fetcher = FakeFetcher::serving("remote");

    assert!(ensure_file(&fetcher, &path, Some("https://example.invalid/cedict")).await);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "local");
}

#[tokio::test]
async fn test_failed_download_is_tried_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cedict_ts.u8");
    let fetcher = FakeFetcher::failing();

    assert!(!ensure_file(&fetcher, &path, Some("https://example.invalid/cedict")).await);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert!(!path.exists());

    assert!(!ensure_file(&fetcher, &path, None).await);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}
