use std::fs::File;
use std::path::Path;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::HttpConfig;
use crate::error::FetchError;

/// Fetches a remote sample into a local file.
pub trait SampleClient: Send + Sync {
    fn download(&self, url: &str, destination: &Path) -> Result<(), FetchError>;
}

impl<T: SampleClient + ?Sized> SampleClient for &T {
    fn download(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        (**self).download(url, destination)
    }
}

#[derive(Clone)]
pub struct HttpSampleClient {
    client: Client,
}

impl HttpSampleClient {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("sample-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::Http(err.to_string()))?;
        Ok(Self { client })
    }

    fn handle_status(response: Response) -> Result<Response, FetchError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "sample request failed".to_string());
        Err(FetchError::HttpStatus { status, message })
    }
}

impl SampleClient for HttpSampleClient {
    // A failed copy leaves whatever was written at `destination`.
    fn download(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FetchError::Http(err.to_string()))?;
        let mut response = Self::handle_status(response)?;
        let mut file =
            File::create(destination).map_err(|err| FetchError::Filesystem(err.to_string()))?;
        std::io::copy(&mut response, &mut file)
            .map_err(|err| FetchError::Filesystem(err.to_string()))?;
        Ok(())
    }
}
