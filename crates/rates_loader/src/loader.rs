use crate::source::RatesSource;
use log::{debug, warn};
use rates_model::{RateEntry, SchemaError, dataset_from_value};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    Network(String),
    Io(String),
    InvalidUrl(String),
    Schema(SchemaError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "Network error: {}", e),
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            LoadError::Schema(e) => write!(f, "{}", e),
        }
    }
}

impl Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> LoadError {
        LoadError::Network(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> LoadError {
        LoadError::Io(err.to_string())
    }
}

impl From<SchemaError> for LoadError {
    fn from(err: SchemaError) -> LoadError {
        LoadError::Schema(err)
    }
}

/// Fetches the dataset once.
///
/// Malformed JSON is not an error: it yields an empty dataset. Transport
/// failures and documents of the wrong shape are returned to the caller.
pub async fn load<S: RatesSource>(source: &S) -> Result<Vec<RateEntry>, LoadError> {
    let text = source.fetch_text().await?;

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            warn!("load | malformed rates document, using empty dataset: {}", e);
            return Ok(vec![]);
        }
    };

    let dataset = dataset_from_value(&value)?;
    debug!("load | entries: {}", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static str);

    impl RatesSource for StaticSource {
        async fn fetch_text(&self) -> Result<String, LoadError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    impl RatesSource for FailingSource {
        async fn fetch_text(&self) -> Result<String, LoadError> {
            Err(LoadError::Network("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn load_pass_valid_document() {
        let source = StaticSource(
            r#"[{"bank":"Bank A","date":"2024-01-05","source_url":null,"rates":[{"ccy":"USD","buy":27,"sell":27.5}]}]"#,
        );
        let dataset = load(&source).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].bank, "Bank A");
        assert_eq!(dataset[0].rates[0].sell, Some(27.5));
    }

    #[tokio::test]
    async fn load_pass_malformed_json_is_empty() {
        let dataset = load(&StaticSource("{not json")).await.unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn load_pass_empty_body_is_empty() {
        let dataset = load(&StaticSource("")).await.unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn load_fail_network() {
        let result = load(&FailingSource).await;
        assert!(matches!(result, Err(LoadError::Network(_))));
    }

    #[tokio::test]
    async fn load_fail_wrong_shape() {
        let result = load(&StaticSource(r#"{"bank":"Bank A"}"#)).await;
        assert!(matches!(result, Err(LoadError::Schema(_))));
    }
}
