use thiserror::Error;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Output error: {0}")]
    OutputError(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

impl CounterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CounterError::IoError(_)
            | CounterError::ConfigParseError { .. }
            | CounterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CounterError::OutputError(_) => ErrorCategory::Output,
        }
    }

    /// 退出碼：配置錯誤 2，輸出錯誤 1
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Output => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CounterError::IoError(e) => format!("Could not read the config file: {}", e),
            CounterError::ConfigParseError { path, .. } => {
                format!("Config file '{}' is not valid", path)
            }
            CounterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CounterError::OutputError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Standard output was closed before the run finished".to_string()
            }
            CounterError::OutputError(e) => format!("Could not write to standard output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CounterError::IoError(_) => "Check that the --config path exists and is readable",
            CounterError::ConfigParseError { .. } => {
                "Only [counter] and [process] sections with the documented keys are accepted"
            }
            CounterError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line or in the config file"
            }
            CounterError::OutputError(_) => "Keep the reading end of the pipe open until the run exits",
        }
    }
}

pub type Result<T> = std::result::Result<T, CounterError>;
