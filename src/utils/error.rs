use crate::domain::model::FormatField;
use thiserror::Error;

/// 單次轉換的錯誤，直接以 400 回傳給呼叫端
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid {field} format: {format}")]
    UnsupportedFormat { field: FormatField, format: String },

    #[error("invalid input value: {value}")]
    InvalidValue { value: String },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::ConfigError { .. } | ServiceError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ServiceError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::IoError(_) => {
                "Check that the address is free and the config file is readable"
            }
            ServiceError::ConfigError { .. } | ServiceError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments and restart"
            }
        }
    }

    /// 程序結束碼：設定錯誤為 2，其他為 1
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
