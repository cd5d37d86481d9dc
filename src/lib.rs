pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{http::router, server::ConvertServer};
pub use crate::config::{CliArgs, ServerSettings};
pub use crate::core::convert;
pub use crate::domain::model::{ConversionRequest, NumberFormat};
pub use crate::utils::error::{ConversionError, Result, ServiceError};
