pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod render;
pub mod search;
pub mod selectors;
pub mod server;

pub use config::Config;
pub use models::Product;
pub use parser::{Extractor, parse_products};
pub use search::ProductSearch;
