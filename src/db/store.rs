use std::{future::Future, time::Duration};

use sea_orm::{DatabaseConnection, DbErr};
use tracing::warn;

use crate::config::{DatabaseConfig, defaults};

use super::dao::{DaoLayerError, DaoResult};

#[derive(Debug, Clone)]
pub struct StorePolicy {
    pub op_timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            op_timeout: Duration::from_secs(defaults::DEFAULT_DB_OP_TIMEOUT_SECS as u64),
            max_retries: defaults::DEFAULT_DB_MAX_RETRIES as u32,
            retry_backoff: Duration::from_millis(defaults::DEFAULT_DB_RETRY_BACKOFF_MS as u64),
        }
    }
}

impl From<&DatabaseConfig> for StorePolicy {
    fn from(cfg: &DatabaseConfig) -> Self {
        Self {
            op_timeout: cfg.op_timeout(),
            max_retries: cfg.max_retries,
            retry_backoff: cfg.retry_backoff(),
        }
    }
}

/// Connection handle shared by every DAO.
///
/// Each operation runs under `policy.op_timeout`. Only connection acquisition
/// failures are retried; anything that may already have reached the database
/// is surfaced to the caller.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
    policy: StorePolicy,
}

impl Store {
    pub fn new(db: DatabaseConnection, policy: StorePolicy) -> Self {
        Self { db, policy }
    }

    pub fn with_defaults(db: &DatabaseConnection) -> Self {
        Self::new(db.clone(), StorePolicy::default())
    }

    pub async fn run<T, F, Fut>(&self, op: &'static str, f: F) -> DaoResult<T>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, DbErr>> + Send,
        T: Send,
    {
        let mut attempt: u32 = 0;
        loop {
            match tokio::time::timeout(self.policy.op_timeout, f(self.db.clone())).await {
                Err(_) => {
                    let secs = self.policy.op_timeout.as_secs();
                    warn!(op, secs, "store operation timed out");
                    return Err(DaoLayerError::Timeout { op, secs });
                }
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(err))
                    if DaoLayerError::is_retryable(&err) && attempt < self.policy.max_retries =>
                {
                    let delay = self.policy.retry_backoff * 2u32.saturating_pow(attempt);
                    attempt += 1;
                    warn!(op, attempt, delay_ms = delay.as_millis() as u64, error = %err, "retrying store operation");
                    tokio::time::sleep(delay).await;
                }
                Ok(Err(err)) => return Err(DaoLayerError::classify(op, err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicU32, Ordering},
        },
        time::Duration,
    };

    use sea_orm::{ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use super::{Store, StorePolicy};
    use crate::db::dao::DaoLayerError;

    fn store(policy: StorePolicy) -> Store {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        Store::new(db, policy)
    }

    fn fast_policy() -> StorePolicy {
        StorePolicy {
            op_timeout: Duration::from_millis(50),
            max_retries: 2,
            retry_backoff: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn slow_operation_times_out_as_transient() {
        let store = store(fast_policy());

        let err = store
            .run("slow", |_db| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, DbErr>(())
            })
            .await
            .expect_err("operation should time out");

        assert!(matches!(err, DaoLayerError::Timeout { op: "slow", .. }));
    }

    #[tokio::test]
    async fn acquire_failures_are_retried_until_success() {
        let store = store(fast_policy());
        let calls = Arc::new(AtomicU32::new(0));

        let value = store
            .run("flaky", {
                let calls = calls.clone();
                move |_db| {
                    let calls = calls.clone();
                    async move {
                        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                            Err(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout))
                        } else {
                            Ok(7)
                        }
                    }
                }
            })
            .await
            .expect("second attempt should succeed");

        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let store = store(fast_policy());
        let calls = Arc::new(AtomicU32::new(0));

        let err = store
            .run("down", {
                let calls = calls.clone();
                move |_db| {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err::<(), _>(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout))
                    }
                }
            })
            .await
            .expect_err("operation should give up");

        assert!(matches!(err, DaoLayerError::Unavailable { op: "down" }));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn query_errors_are_not_retried() {
        let store = store(fast_policy());
        let calls = Arc::new(AtomicU32::new(0));

        let err = store
            .run("broken", {
                let calls = calls.clone();
                move |_db| {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err::<(), _>(DbErr::Query(RuntimeErr::Internal("bad sql".to_string())))
                    }
                }
            })
            .await
            .expect_err("operation should fail");

        assert!(matches!(err, DaoLayerError::Db(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
