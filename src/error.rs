use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a roster source.
///
/// A name that matches no record is never an error; lookups report that as
/// `None` or an empty set.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("line {line}: expected 5 fields, found {fields}: {content:?}")]
    MalformedRecord {
        line: usize,
        fields: usize,
        content: String,
    },

    #[error("cannot read roster '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_line() {
        let err = RosterError::MalformedRecord {
            line: 3,
            fields: 2,
            content: "Harry|Potter".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 3:"));
        assert!(msg.contains("found 2"));
        assert!(msg.contains("Harry|Potter"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = RosterError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
    }
}
