use crate::format::escape_html;
use crate::table::TRACKED_CURRENCIES;

/// The three page regions the bootstrap writes to.
pub trait View {
    /// Replaces the whole table body.
    fn set_rows(&mut self, html: String);
    fn set_timestamp(&mut self, text: String);
    fn set_status(&mut self, text: String);
}

const LOADING: &str = "загрузка…";

/// A self-contained HTML page holding the rates table.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlPage {
    rows: String,
    stamp: String,
    status: String,
}

impl Default for HtmlPage {
    fn default() -> Self {
        HtmlPage {
            rows: String::new(),
            stamp: String::new(),
            status: LOADING.to_string(),
        }
    }
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &str {
        &self.rows
    }

    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn render(&self) -> String {
        let currency_headers: String = TRACKED_CURRENCIES
            .iter()
            .map(|ccy| format!("<th>{}</th>", ccy))
            .collect();

        format!(
            r#"<!doctype html>
<html lang="ru">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Курсы валют в банках</title>
</head>
<body>
<h1>Курсы валют в банках</h1>
<p>Обновлено: <span id="stamp">{stamp}</span> · <span id="updated">{status}</span></p>
<table>
<thead><tr><th>Банк</th>{currency_headers}<th>Дата</th><th>Источник</th></tr></thead>
<tbody id="rows">{rows}</tbody>
</table>
</body>
</html>
"#,
            stamp = escape_html(self.stamp.as_str()),
            status = escape_html(self.status.as_str()),
            currency_headers = currency_headers,
            rows = self.rows,
        )
    }
}

impl View for HtmlPage {
    fn set_rows(&mut self, html: String) {
        self.rows = html;
    }

    fn set_timestamp(&mut self, text: String) {
        self.stamp = text;
    }

    fn set_status(&mut self, text: String) {
        self.status = text;
    }
}
