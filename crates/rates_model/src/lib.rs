use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

/// One currency quotation inside a bank entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLine {
    pub ccy: String,
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

/// One bank's quotations for a date.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub bank: String,
    pub date: Option<String>,
    pub source_url: Option<String>,
    pub rates: Vec<RateLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    pub path: String,
    pub expected: &'static str,
}

impl SchemaError {
    fn new(path: impl Into<String>, expected: &'static str) -> Self {
        SchemaError {
            path: path.into(),
            expected,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Schema error at {}: expected {}", self.path, self.expected)
    }
}

impl Error for SchemaError {}

/// Converts a parsed `rates.json` document into the typed dataset.
///
/// The order of entries and of the lines inside each entry is kept as is.
/// Prices that are not JSON numbers are treated as missing.
pub fn dataset_from_value(value: &Value) -> Result<Vec<RateEntry>, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::new("$", "array of bank entries"))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| entry_from_value(item, &format!("$[{}]", i)))
        .collect()
}

fn entry_from_value(value: &Value, path: &str) -> Result<RateEntry, SchemaError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SchemaError::new(path, "object"))?;

    let bank = optional_string(obj, "bank", path)?.unwrap_or_default();
    let date = optional_string(obj, "date", path)?.filter(|date| !date.is_empty());
    let source_url = optional_string(obj, "source_url", path)?.filter(|url| !url.is_empty());

    let rates = match obj.get("rates") {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(lines)) => lines
            .iter()
            .enumerate()
            .map(|(i, line)| line_from_value(line, &format!("{}.rates[{}]", path, i)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(SchemaError::new(format!("{}.rates", path), "array")),
    };

    Ok(RateEntry {
        bank,
        date,
        source_url,
        rates,
    })
}

fn line_from_value(value: &Value, path: &str) -> Result<RateLine, SchemaError> {
    let obj = value
        .as_object()
        .ok_or_else(|| SchemaError::new(path, "object"))?;

    let ccy = optional_string(obj, "ccy", path)?
        .ok_or_else(|| SchemaError::new(format!("{}.ccy", path), "string"))?;

    Ok(RateLine {
        ccy,
        buy: obj.get("buy").and_then(Value::as_f64),
        sell: obj.get("sell").and_then(Value::as_f64),
    })
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<String>, SchemaError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::new(format!("{}.{}", path, key), "string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dataset_from_value_pass_full_entry() {
        let value = json!([{
            "bank": "Bank A",
            "date": "2024-01-05",
            "source_url": "https://a.example",
            "rates": [
                {"ccy": "USD", "buy": 27.0, "sell": 27.5},
                {"ccy": "EUR", "buy": 29.1, "sell": null}
            ]
        }]);
        let result = dataset_from_value(&value).unwrap();
        assert_eq!(
            result,
            vec![RateEntry {
                bank: "Bank A".to_string(),
                date: Some("2024-01-05".to_string()),
                source_url: Some("https://a.example".to_string()),
                rates: vec![
                    RateLine {
                        ccy: "USD".to_string(),
                        buy: Some(27.0),
                        sell: Some(27.5),
                    },
                    RateLine {
                        ccy: "EUR".to_string(),
                        buy: Some(29.1),
                        sell: None,
                    },
                ],
            }]
        );
    }

    #[test]
    fn dataset_from_value_pass_empty_array() {
        let result = dataset_from_value(&json!([])).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn dataset_from_value_pass_keeps_order() {
        let value = json!([
            {"bank": "Zeta", "date": "2024-01-01", "rates": []},
            {"bank": "Alpha", "date": "2024-01-02", "rates": []}
        ]);
        let banks: Vec<String> = dataset_from_value(&value)
            .unwrap()
            .into_iter()
            .map(|e| e.bank)
            .collect();
        assert_eq!(banks, vec!["Zeta".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn dataset_from_value_pass_missing_optional_fields() {
        let result = dataset_from_value(&json!([{}])).unwrap();
        assert_eq!(
            result[0],
            RateEntry {
                bank: String::new(),
                date: None,
                source_url: None,
                rates: vec![],
            }
        );
    }

    #[test]
    fn dataset_from_value_pass_empty_source_url_is_absent() {
        let result = dataset_from_value(&json!([{"bank": "B", "source_url": ""}])).unwrap();
        assert_eq!(result[0].source_url, None);
    }

    #[test]
    fn dataset_from_value_pass_empty_date_is_absent() {
        let result = dataset_from_value(&json!([{"bank": "B", "date": ""}])).unwrap();
        assert_eq!(result[0].date, None);
    }

    #[test]
    fn dataset_from_value_pass_non_numeric_prices_are_missing() {
        let value = json!([{"bank": "B", "rates": [{"ccy": "USD", "buy": "12", "sell": true}]}]);
        let line = &dataset_from_value(&value).unwrap()[0].rates[0];
        assert_eq!(line.buy, None);
        assert_eq!(line.sell, None);
    }

    #[test]
    fn dataset_from_value_pass_duplicate_codes_kept() {
        let value = json!([{"bank": "B", "rates": [
            {"ccy": "USD", "buy": 1, "sell": 2},
            {"ccy": "USD", "buy": 3, "sell": 4}
        ]}]);
        assert_eq!(dataset_from_value(&value).unwrap()[0].rates.len(), 2);
    }

    #[test]
    fn dataset_from_value_fail_top_level_object() {
        let err = dataset_from_value(&json!({"bank": "B"})).unwrap_err();
        assert_eq!(err.path, "$");
    }

    #[test]
    fn dataset_from_value_fail_entry_not_object() {
        let err = dataset_from_value(&json!([{"bank": "A"}, 42])).unwrap_err();
        assert_eq!(err, SchemaError::new("$[1]", "object"));
    }

    #[test]
    fn dataset_from_value_fail_rates_not_array() {
        let err = dataset_from_value(&json!([{"bank": "A", "rates": "USD"}])).unwrap_err();
        assert_eq!(err.path, "$[0].rates");
    }

    #[test]
    fn dataset_from_value_fail_bank_not_string() {
        let err = dataset_from_value(&json!([{"bank": 7}])).unwrap_err();
        assert_eq!(err.to_string(), "Schema error at $[0].bank: expected string");
    }

    #[test]
    fn dataset_from_value_fail_line_without_ccy() {
        let err = dataset_from_value(&json!([{"rates": [{"buy": 1}]}])).unwrap_err();
        assert_eq!(err.path, "$[0].rates[0].ccy");
    }
}
