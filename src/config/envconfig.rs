use std::path::{Path, PathBuf};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Points at an explicit dotenv file. Kept outside the `APP_` namespace so
/// it never lands in the deserialized config.
pub const ENV_FILE_VAR: &str = "RESTAURANT_ENV_FILE";

pub type EnvVars = config_rs::Map<String, String>;

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        load_dotenv();
        Self::build(None)
    }

    /// Reads `PREFIX_*` keys from `vars` instead of the process environment.
    fn from_vars(vars: EnvVars) -> Result<Self> {
        Self::build(Some(vars))
    }

    fn build(vars: Option<EnvVars>) -> Result<Self> {
        let source = config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
            .source(vars);

        let cfg = config_rs::Config::builder()
            .add_source(source)
            .build()
            .with_context(|| format!("failed to read {}_* variables", Self::PREFIX))?
            .try_deserialize::<Self>()
            .with_context(|| format!("{}_* variables do not form a valid config", Self::PREFIX))?;

        cfg.validate()?;
        Ok(cfg)
    }
}

/// Loads the first dotenv file that exists. Variables already set win.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv_candidates()
        .into_iter()
        .find(|path| dotenvy::from_path(path).is_ok())
}

fn dotenv_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(explicit) = std::env::var_os(ENV_FILE_VAR) {
        candidates.push(PathBuf::from(explicit));
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    candidates.push(PathBuf::from(".env"));
    candidates
}

#[cfg(test)]
mod tests {
    use super::{EnvConfig, EnvVars};
    use crate::config::{AppConfig, defaults};

    fn vars(pairs: &[(&str, &str)]) -> EnvVars {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn nested_sections_come_from_double_underscore_keys() {
        let cfg = AppConfig::from_vars(vars(&[
            ("APP_GENERAL__PORT", "9000"),
            ("APP_DATABASE__URL", "sqlite::memory:"),
            ("APP_AUTH__JWT_SECRET", "kitchen-secret"),
            ("UNRELATED", "ignored"),
        ]))
        .expect("config should load");

        assert_eq!(cfg.general.port, 9000);
        assert_eq!(cfg.general.host, defaults::DEFAULT_HOST);
        let database = cfg.require_database().expect("database section");
        assert_eq!(database.url, "sqlite::memory:");
        assert_eq!(database.max_retries, defaults::DEFAULT_DB_MAX_RETRIES as u32);
        let auth = cfg.require_auth().expect("auth section");
        assert_eq!(auth.refresh_ttl_hours, defaults::DEFAULT_REFRESH_TTL_HOURS);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AppConfig::from_vars(vars(&[
            ("APP_AUTH__JWT_SECRET", "kitchen-secret"),
            ("APP_AUTH__ACCESS_TTL_HOURS", "0"),
        ]))
        .expect_err("zero ttl should be rejected");

        assert!(format!("{err:#}").contains("auth.access_ttl_hours must be > 0"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_vars(vars(&[("APP_KITCHEN__OVENS", "2")])).is_err());
    }
}
