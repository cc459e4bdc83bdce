pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 8000;
pub const DEFAULT_RUST_LOG: &str = "info,restaurant_server=debug,tower_http=debug,sqlx=warn";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_DB_OP_TIMEOUT_SECS: i64 = 100;
pub const DEFAULT_DB_MAX_RETRIES: i64 = 3;
pub const DEFAULT_DB_RETRY_BACKOFF_MS: i64 = 200;
pub const DEFAULT_ACCESS_TTL_HOURS: i64 = 24;
pub const DEFAULT_REFRESH_TTL_HOURS: i64 = 168;
