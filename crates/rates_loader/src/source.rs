use crate::loader::LoadError;
use log::debug;
use reqwest::Url;
use std::path::PathBuf;

pub const RATES_RESOURCE: &str = "./rates.json";

/// Where the raw `rates.json` text comes from.
#[allow(async_fn_in_trait)]
pub trait RatesSource {
    async fn fetch_text(&self) -> Result<String, LoadError>;
}

pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
    headers: reqwest::header::HeaderMap,
}

impl HttpSource {
    /// `base_url` plays the role of the page address: the resource is
    /// resolved relative to it the same way a browser resolves links.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let base = Url::parse(base_url).map_err(|e| LoadError::InvalidUrl(e.to_string()))?;
        let url = base
            .join(RATES_RESOURCE)
            .map_err(|e| LoadError::InvalidUrl(e.to_string()))?;

        let mut reqwest_headers = reqwest::header::HeaderMap::new();
        reqwest_headers.insert(
            reqwest::header::CACHE_CONTROL,
            reqwest::header::HeaderValue::from_static("no-cache"),
        );
        reqwest_headers.insert(
            reqwest::header::PRAGMA,
            reqwest::header::HeaderValue::from_static("no-cache"),
        );

        Ok(HttpSource {
            url,
            client: reqwest::Client::new(),
            headers: reqwest_headers,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl RatesSource for HttpSource {
    async fn fetch_text(&self) -> Result<String, LoadError> {
        debug!("fetch_text | url: {}", self.url);

        // status is not checked, a non-JSON error page degrades to an empty dataset
        let text = self
            .client
            .get(self.url.clone())
            .headers(self.headers.clone())
            .send()
            .await?
            .text()
            .await?;

        Ok(text)
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl RatesSource for FileSource {
    async fn fetch_text(&self) -> Result<String, LoadError> {
        debug!("fetch_text | path: {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(text)
    }
}
