pub mod loader;
pub mod source;

pub use loader::{LoadError, load};
pub use source::{FileSource, HttpSource, RatesSource};
