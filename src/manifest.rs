use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::FetchError;

/// Logical sample names mapped to source URLs, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, String)>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let content =
            fs::read_to_string(path).map_err(|_| FetchError::ManifestRead(path.to_path_buf()))?;
        Self::parse(&content, path)
    }

    pub fn from_json_str(content: &str) -> Result<Self, FetchError> {
        Self::parse(content, Path::new("<memory>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, FetchError> {
        let parse_error = |message: String| FetchError::ManifestParse {
            path: PathBuf::from(path),
            message,
        };

        let value: Value =
            serde_json::from_str(content).map_err(|err| parse_error(err.to_string()))?;
        let Value::Object(map) = value else {
            return Err(parse_error(
                "expected a JSON object of name -> url".to_string(),
            ));
        };

        let entries = map
            .into_iter()
            .map(|(name, url)| match url {
                Value::String(url) => Ok((name, url)),
                other => Err(parse_error(format!(
                    "value for {name:?} must be a string, found {other}"
                ))),
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
