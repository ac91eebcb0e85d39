// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
}

/// Specific error types for portfolio content loading issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ContentError {
    /// A markdown post has no `+++` front matter block
    MissingFrontMatter,

    /// The front matter block was opened but never closed
    UnterminatedFrontMatter,

    /// The front matter is not valid TOML or misses required fields
    InvalidFrontMatter(String),

    /// The `date` field does not parse as `YYYY-MM-DD`
    InvalidDate(String),

    /// A content table file (works, experience, profile) is not valid TOML
    InvalidTable(String),

    /// A referenced content file does not exist (embedded or on disk)
    MissingFile(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::MissingFrontMatter => "error-content-missing-front-matter",
            ContentError::UnterminatedFrontMatter => "error-content-unterminated-front-matter",
            ContentError::InvalidFrontMatter(_) => "error-content-invalid-front-matter",
            ContentError::InvalidDate(_) => "error-content-invalid-date",
            ContentError::InvalidTable(_) => "error-content-invalid-table",
            ContentError::MissingFile(_) => "error-content-missing-file",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingFrontMatter => {
                write!(f, "Post is missing a +++ front matter block")
            }
            ContentError::UnterminatedFrontMatter => {
                write!(f, "Front matter block is not terminated")
            }
            ContentError::InvalidFrontMatter(msg) => {
                write!(f, "Invalid front matter: {}", msg)
            }
            ContentError::InvalidDate(raw) => {
                write!(f, "Invalid date (expected YYYY-MM-DD): {}", raw)
            }
            ContentError::InvalidTable(msg) => write!(f, "Invalid content table: {}", msg),
            ContentError::MissingFile(path) => write!(f, "Missing content file: {}", path),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
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
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_wraps_into_error() {
        let err: Error = ContentError::MissingFrontMatter.into();
        assert!(matches!(err, Error::Content(ContentError::MissingFrontMatter)));
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::MissingFrontMatter.i18n_key(),
            "error-content-missing-front-matter"
        );
        assert_eq!(
            ContentError::InvalidDate("x".into()).i18n_key(),
            "error-content-invalid-date"
        );
        assert_eq!(
            ContentError::MissingFile("works.toml".into()).i18n_key(),
            "error-content-missing-file"
        );
    }

    #[test]
    fn content_error_display_mentions_path() {
        let err = ContentError::MissingFile("posts/a.md".into());
        assert!(format!("{}", err).contains("posts/a.md"));
    }

    #[test]
    fn invalid_date_display_mentions_raw_value() {
        let err = ContentError::InvalidDate("07-08-2026".into());
        assert!(format!("{}", err).contains("07-08-2026"));
    }
}
