use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("{giver} was paired with themself")]
    PairingViolation { giver: String, receiver: String },

    #[error("No messages have been sent, try again.")]
    NothingSent(#[source] Box<SantaError>),

    #[error("Message to {to} could not be sent: {message}")]
    Delivery { to: String, message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Participant list error at line {line}: {message}")]
    Participants { line: usize, message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 非零代表失敗
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SantaError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寄送失敗可重試,但不能回報成功
            SantaError::PairingViolation { .. }
            | SantaError::NothingSent(_)
            | SantaError::Delivery { .. } => ErrorSeverity::Medium,
            SantaError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::PairingViolation { giver, .. } => {
                format!("{} drew themself, the draw is invalid", giver)
            }
            SantaError::NothingSent(_) => self.to_string(),
            SantaError::Csv(e) => format!("The participant CSV file could not be read: {}", e),
            SantaError::Io(e) => format!("A file could not be accessed: {}", e),
            SantaError::TomlParse(e) => format!("The configuration file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::PairingViolation { .. } | SantaError::NothingSent(_) => {
                "Run the draw again, every run shuffles the participants anew"
            }
            SantaError::Delivery { .. } => "Check the SMTP host and the recipient address",
            SantaError::Template { .. } => {
                "Use only ${secret_santa} and ${receiver} placeholders and write a literal $ as $$"
            }
            SantaError::Participants { .. } | SantaError::Csv(_) => {
                "Check that every row holds a name and an email address"
            }
            SantaError::Io(_) => "Check that the file exists and is readable",
            SantaError::TomlParse(_) | SantaError::Config { .. } | SantaError::Validation { .. } => {
                "Check the command line flags and the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
