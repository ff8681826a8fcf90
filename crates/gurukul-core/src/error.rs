use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid academic year: {0}")]
    InvalidAcademicYear(String),

    #[error("Unknown exam type: {0}")]
    UnknownExamType(String),

    #[error("Unknown grade scale: {0}")]
    UnknownGradeScale(String),

    #[error("Dataset error in {source_name}: {message}")]
    Dataset {
        source_name: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}

impl Error {
    pub(crate) fn dataset(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Dataset {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
