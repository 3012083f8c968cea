// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised by the fallible parts of the crate (configuration and
/// design files). Presentation operations themselves never fail.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Theme(ThemeError),
}

/// Specific failures when resolving a named design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No design file with this name could be found.
    NotFound(String),

    /// The design file exists but could not be parsed.
    InvalidDesign(String),

    /// The design names a message kind that does not exist.
    UnknownKind(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::NotFound(name) => write!(f, "Design not found: {}", name),
            ThemeError::InvalidDesign(msg) => write!(f, "Invalid design file: {}", msg),
            ThemeError::UnknownKind(kind) => write!(f, "Unknown message kind: {}", kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Error::Theme(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_design_file_reads_as_io_failure() {
        let err: Error = std::fs::read_to_string("/nonexistent/toast_queue/design.toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O Error: "));
    }

    #[test]
    fn theme_errors_keep_their_detail() {
        let cases = [
            (ThemeError::NotFound("night".into()), "Design not found: night"),
            (ThemeError::InvalidDesign("line 3".into()), "Invalid design file: line 3"),
            (ThemeError::UnknownKind("info".into()), "Unknown message kind: info"),
        ];
        for (theme_error, detail) in cases {
            let err = Error::from(theme_error);
            assert_eq!(err.to_string(), format!("Theme Error: {detail}"));
        }
    }

    #[test]
    fn malformed_settings_become_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("[timing\nminimum_secs = 2");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(ref detail) if !detail.is_empty()));
        assert!(err.to_string().starts_with("Config Error: "));
    }
}
