//! Existence-keyed sample cache.
//!
//! A file at `<download_dir>/<file name>` is the cache entry; its presence
//! alone marks the sample as fetched. Sizes and hashes are never checked, so
//! a truncated write from an earlier failed run is treated as complete.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::client::SampleClient;
use crate::domain::{SampleRecord, derive_file_name, file_stem};
use crate::error::FetchError;
use crate::manifest::Manifest;

/// Outcome of a single [`resolve_and_cache`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFile {
    pub path: Utf8PathBuf,
    pub downloaded: bool,
}

/// Ensures the file for `url` exists under `target_dir`, downloading it when absent.
pub fn resolve_and_cache<C: SampleClient + ?Sized>(
    client: &C,
    url: &str,
    target_dir: &Utf8Path,
    display_name: Option<&str>,
) -> Result<CachedFile, FetchError> {
    let file_name = derive_file_name(url, display_name)?;
    let local_path = target_dir.join(file_name);

    fs::create_dir_all(target_dir.as_std_path())
        .map_err(|err| FetchError::Filesystem(format!("create {target_dir}: {err}")))?;

    if local_path.as_std_path().exists() {
        debug!("{local_path} already present");
        return Ok(CachedFile {
            path: local_path,
            downloaded: false,
        });
    }

    info!("Downloading {url} to {local_path}");
    client.download(url, local_path.as_std_path())?;
    Ok(CachedFile {
        path: local_path,
        downloaded: true,
    })
}

/// Whether `<download_dir>/<name>` exists for every manifest name.
///
/// Names are joined verbatim, not through [`derive_file_name`].
pub fn are_samples_downloaded(
    manifest_path: &Utf8Path,
    download_dir: &Utf8Path,
) -> Result<bool, FetchError> {
    let manifest = Manifest::load(manifest_path.as_std_path())?;
    Ok(all_names_present(&manifest, download_dir))
}

pub fn all_names_present(manifest: &Manifest, download_dir: &Utf8Path) -> bool {
    manifest
        .names()
        .all(|name| download_dir.join(name).as_std_path().exists())
}

/// Lists `*.<extension>` entries of `download_dir` in directory order.
///
/// A missing directory yields no records.
pub fn scan_downloaded(
    download_dir: &Utf8Path,
    extension: &str,
) -> Result<Vec<SampleRecord>, FetchError> {
    let entries = match fs::read_dir(download_dir.as_std_path()) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(FetchError::Filesystem(format!(
                "read {download_dir}: {err}"
            )));
        }
    };

    let suffix = format!(".{extension}");
    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| FetchError::Filesystem(err.to_string()))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!("skipping non-UTF-8 entry {:?} in {download_dir}", entry.path());
            continue;
        };
        if !file_name.ends_with(&suffix) {
            continue;
        }
        records.push(SampleRecord::new(
            file_stem(file_name),
            download_dir.join(file_name),
        ));
    }
    Ok(records)
}
