// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors surfaced by the notification store, its provider and the settings file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// An accessor was called from a scope that no provider wraps.
    #[error("{accessor} must be used within a NotificationProvider")]
    MissingProvider { accessor: &'static str },

    /// Auto-dismiss timers need a tokio runtime to be spawned on.
    #[error("NotificationProvider requires a tokio runtime to schedule auto-dismiss timers")]
    NoRuntime,

    #[error("Unknown notification kind: {0:?}")]
    UnknownKind(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
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
    fn missing_provider_names_the_accessor() {
        let err = Error::MissingProvider {
            accessor: "use_notification",
        };
        assert_eq!(
            err.to_string(),
            "use_notification must be used within a NotificationProvider"
        );
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad value".into());
        assert_eq!(err.to_string(), "Config Error: bad value");
    }

    #[test]
    fn io_error_converts_into_crate_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }

    #[test]
    fn toml_error_converts_into_config_error() {
        let parse_err = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
