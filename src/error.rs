//! Error types for the Lesser declaration layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown property type '{kind}' at {location}")]
    UnknownPropertyKind { kind: String, location: String },

    #[error("{type_name} is not wired to a matching property kind")]
    InvalidPropertyKind { type_name: String },

    #[error("Malformed legacy property: {message}")]
    MalformedLegacyProperty { message: String },

    #[error("Unknown offset {index}")]
    InvalidIndex { index: i64 },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, CompilerError>;

impl CompilerError {
    pub fn unknown_kind(kind: impl Into<String>, location: impl Into<String>) -> Self {
        Self::UnknownPropertyKind {
            kind: kind.into(),
            location: location.into(),
        }
    }

    pub fn invalid_kind(type_name: impl Into<String>) -> Self {
        Self::InvalidPropertyKind {
            type_name: type_name.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedLegacyProperty {
            message: message.into(),
        }
    }

    pub fn invalid_index(index: i64) -> Self {
        Self::InvalidIndex { index }
    }

    /// True for errors caused by a misconfigured registry rather than by input
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvalidPropertyKind { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CompilerError::unknown_kind("NoSuchKind", "main.less:3:1");
        assert_eq!(err.to_string(), "Unknown property type 'NoSuchKind' at main.less:3:1");

        let err = CompilerError::invalid_index(7);
        assert_eq!(err.to_string(), "Unknown offset 7");
    }

    #[test]
    fn test_internal_errors() {
        assert!(CompilerError::invalid_kind("CommentProperty").is_internal());
        assert!(!CompilerError::malformed("too few slots").is_internal());
        assert!(!CompilerError::invalid_index(-2).is_internal());
    }
}
