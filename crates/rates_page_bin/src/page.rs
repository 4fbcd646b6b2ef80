use chrono::{DateTime, TimeZone};
use log::{error, info};
use rates_loader::{FileSource, HttpSource, LoadError, RatesSource, load};
use rates_render::{View, best_date, format_timestamp, render_rows};
use std::fmt::Display;

pub const STATUS_NO_DATA: &str = "нет данных";
pub const STATUS_LOAD_ERROR: &str = "ошибка загрузки";

/// Runs one page load: fetch, render the table, then fill the status line.
///
/// On a load failure only the status region is touched.
pub async fn show_rates<S, V, Tz>(
    source: &S,
    view: &mut V,
    now: DateTime<Tz>,
) -> Result<(), LoadError>
where
    S: RatesSource,
    V: View,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let dataset = match load(source).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("show_rates | {}", e);
            view.set_status(STATUS_LOAD_ERROR.to_string());
            return Err(e);
        }
    };

    view.set_rows(render_rows(&dataset));
    view.set_timestamp(format_timestamp(&now));

    let status = match best_date(&dataset) {
        Some(date) => format!("на дату: {}", date),
        None => STATUS_NO_DATA.to_string(),
    };
    info!("show_rates | banks: {} | {}", dataset.len(), status);
    view.set_status(status);

    Ok(())
}

/// The configured dataset location.
pub enum PageSource {
    Http(HttpSource),
    File(FileSource),
}

impl RatesSource for PageSource {
    async fn fetch_text(&self) -> Result<String, LoadError> {
        match self {
            PageSource::Http(source) => source.fetch_text().await,
            PageSource::File(source) => source.fetch_text().await,
        }
    }
}
