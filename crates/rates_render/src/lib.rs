pub mod format;
pub mod table;
pub mod view;

pub use format::{escape_html, fmt_number, format_timestamp};
pub use table::{TRACKED_CURRENCIES, best_date, render_rows};
pub use view::{HtmlPage, View};
