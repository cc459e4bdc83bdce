use crate::auth::{CredentialError, TokenError};
use crate::db::dao::DaoLayerError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    /// Store timed out or could not hand out a connection; safe to retry.
    Unavailable(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unavailable(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Conflict { .. } => AppError::conflict(err.to_string()),
            DaoLayerError::Timeout { .. } | DaoLayerError::Unavailable { .. } => {
                AppError::unavailable(err.to_string())
            }
            DaoLayerError::Db(db_err) => {
                tracing::error!(error = %db_err, "database error");
                AppError::internal("database error")
            }
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) => AppError::internal(err.to_string()),
            _ => AppError::unauthorized(err.to_string()),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        AppError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::AppError;
    use crate::{auth::TokenError, db::dao::DaoLayerError};

    #[test]
    fn dao_errors_map_to_client_and_transient_variants() {
        let not_found = AppError::from(DaoLayerError::NotFound {
            entity: "food",
            key: "abc".to_string(),
        });
        assert!(matches!(not_found, AppError::NotFound(_)));
        assert!(not_found.message().contains("abc"));

        let timeout = AppError::from(DaoLayerError::Timeout {
            op: "food.find_by_key",
            secs: 100,
        });
        assert!(matches!(timeout, AppError::Unavailable(_)));

        let db = AppError::from(DaoLayerError::Db(DbErr::Custom("boom".to_string())));
        assert!(matches!(db, AppError::Internal(_)));
        assert!(!db.message().contains("boom"));
    }

    #[test]
    fn token_errors_are_unauthorized() {
        assert!(matches!(
            AppError::from(TokenError::Expired),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from(TokenError::InvalidSignature),
            AppError::Unauthorized(_)
        ));
    }
}
