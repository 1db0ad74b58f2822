use std::fmt;
use std::sync::LazyLock;

use camino::Utf8PathBuf;
use regex::Regex;
use serde::Serialize;

use crate::error::FetchError;

static REJECTED_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9_ \-]").expect("name filter regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Documents,
    Videos,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Documents => "documents",
            Category::Videos => "videos",
        }
    }

    /// Extension (without the dot) picked up by the directory-scan fallback.
    pub fn scan_extension(&self) -> &'static str {
        match self {
            Category::Documents => "pdf",
            Category::Videos => "mp4",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical sample name paired with the local file that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRecord {
    pub name: String,
    pub path: Utf8PathBuf,
}

impl SampleRecord {
    pub fn new(name: impl Into<String>, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Normalizes a display name into a file-name stem.
///
/// Spaces and hyphens become underscores, the result is lower-cased, and
/// anything outside ASCII letters, digits, `_`, `-` and space is dropped.
pub fn sanitize_name(display_name: &str) -> String {
    let normalized = display_name.replace([' ', '-'], "_").to_lowercase();
    REJECTED_NAME_CHARS.replace_all(&normalized, "").into_owned()
}

/// Last `/` segment of a URL, with anything after `?` in that segment removed.
///
/// The segment is taken before the query is stripped, so a `/` inside the
/// query decides the name.
pub fn url_basename(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or(url);
    segment.split('?').next().unwrap_or(segment)
}

/// Extension of a file name including the leading dot, or `""`.
///
/// Leading dots do not start an extension, so `.hidden` has none.
pub fn file_extension(file_name: &str) -> &str {
    let Some(dot) = file_name.rfind('.') else {
        return "";
    };
    if file_name[..dot].chars().all(|ch| ch == '.') {
        return "";
    }
    &file_name[dot..]
}

/// Stem of a file name, the counterpart of [`file_extension`].
pub fn file_stem(file_name: &str) -> &str {
    let ext = file_extension(file_name);
    &file_name[..file_name.len() - ext.len()]
}

/// Local file name for a source URL.
///
/// With a display name the sanitized name is combined with the extension of
/// the URL's basename; otherwise the basename is used verbatim.
pub fn derive_file_name(url: &str, display_name: Option<&str>) -> Result<String, FetchError> {
    if url.trim().is_empty() {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }
    let basename = url_basename(url);
    let file_name = match display_name {
        Some(name) => format!("{}{}", sanitize_name(name), file_extension(basename)),
        None => basename.to_string(),
    };
    if matches!(file_name.as_str(), "" | "." | "..") {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }
    Ok(file_name)
}
