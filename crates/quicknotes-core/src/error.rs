//! Error types for quicknotes.

use thiserror::Error;

/// Result type alias using quicknotes' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for quicknotes operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the failure came from the store being unreachable rather than
    /// from a statement it rejected.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Error::Database(
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_error_display_database() {
        let err = Error::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::Database(sqlx::Error::PoolTimedOut)));
    }

    #[test]
    fn test_connectivity_classification() {
        assert!(Error::Database(sqlx::Error::PoolTimedOut).is_connectivity());
        assert!(Error::Database(sqlx::Error::PoolClosed).is_connectivity());
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(Error::Database(sqlx::Error::Io(io)).is_connectivity());

        assert!(!Error::Database(sqlx::Error::RowNotFound).is_connectivity());
        assert!(!Error::Config("x".to_string()).is_connectivity());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
