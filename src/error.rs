use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the configurable parts of the crate
///
/// The plain transformation functions are total and never produce this error.
/// It is only returned when a case convention, transform name or pipeline
/// definition has to be parsed from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown case convention: {0}")]
    UnknownCase(String),

    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "config")]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl Error {
    pub fn unknown_case(name: impl Into<String>) -> Self {
        Self::UnknownCase(name.into())
    }

    pub fn unknown_transform(name: impl Into<String>) -> Self {
        Self::UnknownTransform(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::unknown_case("shouty").to_string(),
            "Unknown case convention: shouty"
        );
        assert_eq!(
            Error::config("missing steps").to_string(),
            "Configuration error: missing steps"
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_error() {
        let err = toml::from_str::<toml::Table>("steps = [").unwrap_err();
        assert!(matches!(Error::from(err), Error::Config(_)));
    }
}
