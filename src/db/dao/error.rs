use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("database error: {0}")]
    Db(#[source] DbErr),
    #[error("{entity} not found ({key})")]
    NotFound { entity: &'static str, key: String },
    #[error("{op} conflicts with an existing record")]
    Conflict { op: &'static str },
    #[error("store unavailable during {op}")]
    Unavailable { op: &'static str },
    #[error("{op} timed out after {secs}s")]
    Timeout { op: &'static str, secs: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn classify(op: &'static str, err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return Self::Conflict { op };
        }

        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => Self::Unavailable { op },
            other => Self::Db(other),
        }
    }

    /// Whether the operation can be reissued without risk of a double write.
    pub fn is_retryable(err: &DbErr) -> bool {
        matches!(err, DbErr::ConnectionAcquire(_))
    }
}
