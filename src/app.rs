use serde::Serialize;
use tracing::info;

use crate::cache::{are_samples_downloaded, resolve_and_cache, scan_downloaded};
use crate::client::SampleClient;
use crate::config::ResolvedConfig;
use crate::domain::{Category, SampleRecord};
use crate::error::FetchError;
use crate::manifest::Manifest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadResult {
    pub documents: Vec<SampleRecord>,
    pub videos: Vec<SampleRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleAction {
    Downloaded,
    Cached,
    Scanned,
}

impl SampleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleAction::Downloaded => "downloaded",
            SampleAction::Cached => "cached",
            SampleAction::Scanned => "scanned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub category: Category,
    pub name: String,
    pub action: SampleAction,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

pub struct NopSink;

impl ProgressSink for NopSink {
    fn event(&self, _event: ProgressEvent) {}
}

#[derive(Clone)]
pub struct App<C: SampleClient> {
    config: ResolvedConfig,
    client: C,
}

impl<C: SampleClient> App<C> {
    pub fn new(config: ResolvedConfig, client: C) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Fetches every manifest entry of `category`, in manifest order.
    ///
    /// The first failing entry aborts the category.
    pub fn download_samples(
        &self,
        category: Category,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<SampleRecord>, FetchError> {
        let layout = self.config.category(category);
        let manifest = Manifest::load(layout.manifest.as_std_path())?;

        let mut records = Vec::with_capacity(manifest.len());
        for (name, url) in manifest.entries() {
            let cached = resolve_and_cache(
                &self.client,
                url,
                &layout.download_dir,
                Some(name.as_str()),
            )?;
            sink.event(ProgressEvent {
                category,
                name: name.clone(),
                action: if cached.downloaded {
                    SampleAction::Downloaded
                } else {
                    SampleAction::Cached
                },
            });
            records.push(SampleRecord::new(name.clone(), cached.path));
        }
        Ok(records)
    }

    pub fn download_doc_samples(
        &self,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<SampleRecord>, FetchError> {
        self.download_samples(Category::Documents, sink)
    }

    pub fn download_video_samples(
        &self,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<SampleRecord>, FetchError> {
        self.download_samples(Category::Videos, sink)
    }

    pub fn are_category_downloaded(&self, category: Category) -> Result<bool, FetchError> {
        let layout = self.config.category(category);
        are_samples_downloaded(&layout.manifest, &layout.download_dir)
    }

    pub fn are_doc_samples_downloaded(&self) -> Result<bool, FetchError> {
        self.are_category_downloaded(Category::Documents)
    }

    pub fn are_video_samples_downloaded(&self) -> Result<bool, FetchError> {
        self.are_category_downloaded(Category::Videos)
    }

    /// Resolves both categories, scanning the download directory instead of
    /// fetching when the manifest names are already present.
    pub fn download(&self, sink: &dyn ProgressSink) -> Result<DownloadResult, FetchError> {
        let documents = self.resolve_category(Category::Documents, sink)?;
        let videos = self.resolve_category(Category::Videos, sink)?;
        Ok(DownloadResult { documents, videos })
    }

    fn resolve_category(
        &self,
        category: Category,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<SampleRecord>, FetchError> {
        if !self.are_category_downloaded(category)? {
            info!("Downloading {category} samples");
            return self.download_samples(category, sink);
        }

        info!("{category} samples already downloaded");
        let layout = self.config.category(category);
        let records = scan_downloaded(&layout.download_dir, category.scan_extension())?;
        for record in &records {
            sink.event(ProgressEvent {
                category,
                name: record.name.clone(),
                action: SampleAction::Scanned,
            });
        }
        Ok(records)
    }
}
