use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyllabusError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Document '{source_name}' could not be parsed: {reason}")]
    CatastrophicInput { source_name: String, reason: String },

    #[error("Feedback service error: {message}")]
    FeedbackError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SyllabusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyllabusError::ConfigError { .. }
            | SyllabusError::MissingConfigError { .. }
            | SyllabusError::InvalidConfigValueError { .. }
            | SyllabusError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SyllabusError::CatastrophicInput { .. } => ErrorCategory::Input,
            SyllabusError::ApiError(_) | SyllabusError::FeedbackError { .. } => {
                ErrorCategory::Network
            }
            SyllabusError::IoError(_) | SyllabusError::ZipError(_) => ErrorCategory::Storage,
            SyllabusError::CsvError(_)
            | SyllabusError::SerializationError(_)
            | SyllabusError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyllabusError::MissingConfigError { .. } => {
                "Add the missing setting to the command line or the TOML file"
            }
            SyllabusError::InvalidConfigValueError { .. }
            | SyllabusError::ConfigValidationError { .. }
            | SyllabusError::ConfigError { .. } => "Check the configuration values and try again",
            SyllabusError::CatastrophicInput { .. } => {
                "Check that the file is a text export of a syllabus, or raise parse_timeout_ms / max_input_bytes"
            }
            SyllabusError::ApiError(_) | SyllabusError::FeedbackError { .. } => {
                "Check the feedback endpoint, API key and network connection"
            }
            SyllabusError::IoError(_) | SyllabusError::ZipError(_) => {
                "Check that the input files exist and the output directory is writable"
            }
            SyllabusError::CsvError(_)
            | SyllabusError::SerializationError(_)
            | SyllabusError::ProcessingError { .. } => "Re-run with --verbose and inspect the logs",
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 重試錯誤
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Storage => format!("File system problem: {}", self),
            ErrorCategory::Processing => format!("Processing problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyllabusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catastrophic_input_is_high_severity() {
        let err = SyllabusError::CatastrophicInput {
            source_name: "logic.txt".to_string(),
            reason: "parse exceeded 5000 ms".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("logic.txt"));
        assert!(err.user_friendly_message().starts_with("Input problem"));
    }

    #[test]
    fn test_io_error_converts_and_is_critical() {
        let err: SyllabusError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
