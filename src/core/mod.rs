pub mod converter;

pub use crate::domain::model::{ConversionRequest, FormatField, NumberFormat};
pub use crate::utils::error::ConversionError;
pub use converter::convert;
