use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::Category;
use crate::error::FetchError;

pub const DEFAULT_CONFIG_FILE: &str = "sample-fetch.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

const DOC_SAMPLES_MANIFEST: &str = "demo_files/doc_intel_processing_samples.json";
const DOC_SAMPLES_DOWNLOAD_DIR: &str = "demo_files/download/doc_intel_processing";
const VIDEO_SAMPLES_MANIFEST: &str = "demo_files/content_understanding/video_file_web_links.json";
const VIDEO_SAMPLES_DOWNLOAD_DIR: &str = "demo_files/download/video_files";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub documents: Option<CategoryEntry>,
    #[serde(default)]
    pub videos: Option<CategoryEntry>,
    #[serde(default)]
    pub http: Option<HttpEntry>,
    #[serde(default)]
    pub log: Option<LogEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub manifest: Option<String>,
    #[serde(default)]
    pub download_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HttpEntry {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogEntry {
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub manifest: Utf8PathBuf,
    pub download_dir: Utf8PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub documents: CategoryConfig,
    pub videos: CategoryConfig,
    pub http: HttpConfig,
    pub log: LogConfig,
}

impl ResolvedConfig {
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::Documents => &self.documents,
            Category::Videos => &self.videos,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ConfigLoader::resolve_config(Config::default())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the config at `path`, or `sample-fetch.json` when no path is given.
    ///
    /// A missing default file yields the built-in layout; an explicit path
    /// must exist.
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, FetchError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        if path.is_none() && !config_path.exists() {
            return Ok(ResolvedConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| FetchError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| FetchError::ConfigParse(err.to_string()))?;

        Ok(Self::resolve_config(config))
    }

    pub fn resolve_config(config: Config) -> ResolvedConfig {
        ResolvedConfig {
            documents: resolve_category(
                config.documents,
                DOC_SAMPLES_MANIFEST,
                DOC_SAMPLES_DOWNLOAD_DIR,
            ),
            videos: resolve_category(
                config.videos,
                VIDEO_SAMPLES_MANIFEST,
                VIDEO_SAMPLES_DOWNLOAD_DIR,
            ),
            http: HttpConfig {
                timeout: config
                    .http
                    .and_then(|http| http.timeout_secs)
                    .map(Duration::from_secs),
            },
            log: LogConfig {
                filter: config
                    .log
                    .and_then(|log| log.filter)
                    .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
        }
    }
}

fn resolve_category(
    entry: Option<CategoryEntry>,
    default_manifest: &str,
    default_dir: &str,
) -> CategoryConfig {
    let entry = entry.unwrap_or_default();
    CategoryConfig {
        manifest: Utf8PathBuf::from(entry.manifest.as_deref().unwrap_or(default_manifest)),
        download_dir: Utf8PathBuf::from(entry.download_dir.as_deref().unwrap_or(default_dir)),
    }
}
