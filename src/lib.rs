pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, OutputFormat};
pub use core::classifier::{classify, classify_package};
pub use domain::model::{Category, Classification, Package};
pub use utils::error::{Result, SortError};
