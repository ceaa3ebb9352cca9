use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Input file '{path}' not found")]
    InputNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// Failure to turn one row's `Frequency Output` into hertz. Recovered per row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowConversionError {
    #[error("missing 'Frequency Output' field")]
    Missing,

    #[error("empty 'Frequency Output' field")]
    Empty,

    #[error("could not convert '{value}' to a frequency: {source}")]
    Invalid {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("frequency '{value}' is out of range")]
    OutOfRange { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ConverterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConverterError::InputNotFound { .. } | ConverterError::CsvError(_) => {
                ErrorCategory::Input
            }
            ConverterError::IoError(_) => ErrorCategory::Output,
            ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. }
            | ConverterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConverterError::InputNotFound { .. }
            | ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. }
            | ConverterError::MissingConfigError { .. } => ErrorSeverity::High,
            ConverterError::CsvError(_) | ConverterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the binaries use for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConverterError::InputNotFound { path } => {
                format!("Error: Input file '{}' not found.", path)
            }
            ConverterError::CsvError(e) => format!("The input file is not valid CSV: {}", e),
            ConverterError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConverterError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ConverterError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            ConverterError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConverterError::InputNotFound { .. } => {
                "Check the path of the RadioReference CSV export and try again"
            }
            ConverterError::CsvError(_) => {
                "Re-export the frequency list from RadioReference as UTF-8 CSV"
            }
            ConverterError::IoError(_) => {
                "Make sure the output directory exists and is writable"
            }
            ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. }
            | ConverterError::MissingConfigError { .. } => {
                "Fix the reported setting in the command line or profile file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
