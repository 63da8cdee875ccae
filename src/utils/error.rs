use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairSumError {
    #[error("Malformed input in {field}: '{token}' ({reason})")]
    MalformedInput {
        field: String,
        token: String,
        position: Option<usize>,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{failed} of {total} queries did not match their expected result")]
    ExpectationMismatch { failed: usize, total: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Verification,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PairSumError {
    pub fn malformed(field: &str, token: &str, position: Option<usize>, reason: impl Into<String>) -> Self {
        PairSumError::MalformedInput {
            field: field.to_string(),
            token: token.to_string(),
            position,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PairSumError::MalformedInput { .. } => ErrorCategory::Input,
            PairSumError::ConfigValidationError { .. }
            | PairSumError::InvalidConfigValueError { .. }
            | PairSumError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PairSumError::ExpectationMismatch { .. } => ErrorCategory::Verification,
            PairSumError::IoError(_) | PairSumError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Verification => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應到行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PairSumError::MalformedInput { .. } => {
                "Pass the target as an integer and the values as a comma-separated list of integers, e.g. `pairsum 17 10,15,3,7`".to_string()
            }
            PairSumError::ConfigValidationError { field, .. }
            | PairSumError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' entry of the query file", field)
            }
            PairSumError::MissingConfigError { field } => {
                format!("Add '{}' to the query file", field)
            }
            PairSumError::ExpectationMismatch { .. } => {
                "Review the failing queries above; either the data or the `expect` value is wrong".to_string()
            }
            PairSumError::IoError(_) => {
                "Make sure the file exists and is readable".to_string()
            }
            PairSumError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PairSumError::MalformedInput {
                field,
                token,
                position: Some(position),
                reason,
            } => format!(
                "Invalid {} at position {}: '{}' ({})",
                field, position, token, reason
            ),
            PairSumError::MalformedInput {
                field,
                token,
                position: None,
                reason,
            } => format!("Invalid {}: '{}' ({})", field, token, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PairSumError>;
