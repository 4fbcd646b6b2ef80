use crate::format::{EM_DASH, escape_html, fmt_number};
use rates_model::{RateEntry, RateLine};
use std::collections::{BTreeSet, HashMap};

pub const TRACKED_CURRENCIES: [&str; 3] = ["USD", "EUR", "RUB"];

// bank, one per currency, date, source
const COLUMNS: usize = TRACKED_CURRENCIES.len() + 3;

const NO_DATA: &str = "Данных нет";
const SOURCE_LABEL: &str = "сайт";

/// Renders the table body, one row per entry in the order received.
pub fn render_rows(dataset: &[RateEntry]) -> String {
    if dataset.is_empty() {
        return format!(r#"<tr><td colspan="{}">{}</td></tr>"#, COLUMNS, NO_DATA);
    }

    dataset.iter().map(render_row).collect()
}

fn render_row(entry: &RateEntry) -> String {
    // later lines win on duplicate codes
    let by_code: HashMap<&str, &RateLine> = entry
        .rates
        .iter()
        .map(|line| (line.ccy.as_str(), line))
        .collect();

    let cells: String = TRACKED_CURRENCIES
        .iter()
        .map(|ccy| format!("<td>{}</td>", rate_cell(by_code.get(ccy).copied())))
        .collect();

    let date = match entry.date.as_deref() {
        Some(date) => escape_html(date),
        None => EM_DASH.to_string(),
    };

    format!(
        "<tr><td>{}</td>{}<td>{}</td><td>{}</td></tr>",
        escape_html(entry.bank.as_str()),
        cells,
        date,
        source_link(entry.source_url.as_deref()),
    )
}

pub fn rate_cell(line: Option<&RateLine>) -> String {
    match line {
        Some(line) => format!("{} / {}", fmt_number(line.buy), fmt_number(line.sell)),
        None => EM_DASH.to_string(),
    }
}

fn source_link(url: Option<&str>) -> String {
    match url {
        Some(url) if is_web_url(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(url),
            SOURCE_LABEL
        ),
        _ => EM_DASH.to_string(),
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// The latest date across the dataset.
///
/// Dates are compared as strings, which is only correct for a fixed-width
/// zero-padded format such as `YYYY-MM-DD`. Entries without a date are
/// ignored.
pub fn best_date(dataset: &[RateEntry]) -> Option<String> {
    dataset
        .iter()
        .filter_map(|entry| entry.date.as_deref())
        .collect::<BTreeSet<&str>>()
        .last()
        .map(|date| date.to_string())
}
