pub mod classifier;
pub mod samples;

pub use crate::domain::model::{Category, Classification, Package};
pub use crate::utils::error::Result;
