#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};

use demo_sample_fetcher::client::SampleClient;
use demo_sample_fetcher::config::{CategoryConfig, HttpConfig, LogConfig, ResolvedConfig};
use demo_sample_fetcher::error::FetchError;

#[derive(Default)]
pub struct MockClient {
    pub calls: Mutex<Vec<String>>,
    pub fail_on: Option<String>,
}

impl MockClient {
    pub fn failing_on(url: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(url.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SampleClient for MockClient {
    fn download(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.fail_on.as_deref() == Some(url) {
            return Err(FetchError::HttpStatus {
                status: 404,
                message: "not found".to_string(),
            });
        }
        fs::write(destination, format!("payload:{url}"))
            .map_err(|err| FetchError::Filesystem(err.to_string()))
    }
}

pub fn utf8_root(temp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
}

pub fn write_manifest(path: &Utf8Path, entries: &[(&str, &str)]) {
    let body = entries
        .iter()
        .map(|(name, url)| format!("{}: {}", serde_json::json!(name), serde_json::json!(url)))
        .collect::<Vec<_>>()
        .join(", ");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent.as_std_path()).unwrap();
    }
    fs::write(path.as_std_path(), format!("{{{body}}}")).unwrap();
}

pub fn test_config(root: &Utf8Path) -> ResolvedConfig {
    ResolvedConfig {
        documents: CategoryConfig {
            manifest: root.join("manifests/docs.json"),
            download_dir: root.join("download/docs"),
        },
        videos: CategoryConfig {
            manifest: root.join("manifests/videos.json"),
            download_dir: root.join("download/videos"),
        },
        http: HttpConfig::default(),
        log: LogConfig::default(),
    }
}
