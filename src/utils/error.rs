use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: u64, message: String },

    #[error("Floor count must be an integer, got {value}")]
    InvalidFloorType { value: String },

    #[error("Floor count must be positive, got {floor_count}")]
    InvalidFloorCount { floor_count: i64 },

    #[error("Division by zero: house '{address}' has zero population")]
    DivisionByZero { address: String },

    #[error("No house records to search")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Data,
    System,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            EtlError::CsvError(_) | EtlError::ParseError { .. } | EtlError::EmptyInput => {
                ErrorCategory::Input
            }
            EtlError::ValidationError { .. }
            | EtlError::InvalidFloorType { .. }
            | EtlError::InvalidFloorCount { .. }
            | EtlError::DivisionByZero { .. } => ErrorCategory::Data,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
            EtlError::CsvError(_) | EtlError::ParseError { .. } => {
                "Make sure every row has all columns and numeric fields hold numbers"
            }
            EtlError::EmptyInput => "Add at least one data row to the input file",
            EtlError::InvalidFloorType { .. } | EtlError::InvalidFloorCount { .. } => {
                "floor_count must be a positive whole number"
            }
            EtlError::DivisionByZero { .. } => "population must be greater than zero",
            EtlError::ValidationError { .. } => "Fix the reported record and run again",
            EtlError::IoError(_) => "Check that the input file exists and is readable",
            EtlError::SerializationError(_) => "Re-run with --format text",
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Data => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
