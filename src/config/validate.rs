use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }

        if database.op_timeout_secs == 0 {
            errors.push("database.op_timeout_secs must be > 0".to_string());
        }
    }

    if let Some(auth) = cfg.auth.as_ref() {
        if auth.jwt_secret.trim().is_empty() {
            errors.push("auth.jwt_secret must not be empty".to_string());
        }

        if auth.access_ttl_hours <= 0 {
            errors.push("auth.access_ttl_hours must be > 0".to_string());
        }

        if auth.refresh_ttl_hours < auth.access_ttl_hours {
            errors.push(format!(
                "auth.refresh_ttl_hours ({}) must be >= auth.access_ttl_hours ({})",
                auth.refresh_ttl_hours, auth.access_ttl_hours
            ));
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
