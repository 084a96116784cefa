// Error handling framework

use thiserror::Error;

/// Database-specific errors
///
/// Every variant carries the driver's own message; callers surface it
/// verbatim rather than mapping to stable error codes.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => DatabaseError::ConnectionFailed(err.to_string()),
            sqlx::Error::Database(db_err) => {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}
