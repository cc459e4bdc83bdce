use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use super::claims::{AccessClaims, Expiring, RefreshClaims, TokenIdentity, TokenPair};
use crate::config::AuthConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
    #[error("token signing failed: {0}")]
    Signing(String),
}

#[derive(Clone)]
pub struct JwtKeys {
    pub enc: EncodingKey,
    pub dec: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            enc: EncodingKey::from_secret(secret),
            dec: DecodingKey::from_secret(secret),
        }
    }
}

/// Issues and checks HS256 access/refresh pairs.
///
/// The secret is read once from `AuthConfig`; nothing here touches process
/// state. A token is valid while `now < exp`. There is no revocation list.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeys,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            keys: JwtKeys::from_secret(cfg.jwt_secret.as_bytes()),
            access_ttl: Duration::hours(cfg.access_ttl_hours),
            refresh_ttl: Duration::hours(cfg.refresh_ttl_hours),
        }
    }

    pub fn issue_pair(&self, identity: &TokenIdentity) -> Result<TokenPair, TokenError> {
        self.issue_pair_at(identity, Utc::now())
    }

    pub fn issue_pair_at(
        &self,
        identity: &TokenIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let iat = issued_at.timestamp();
        let access = AccessClaims {
            email: identity.email.clone(),
            first_name: identity.first_name.clone(),
            last_name: identity.last_name.clone(),
            uid: identity.uid.clone(),
            iat,
            exp: (issued_at + self.access_ttl).timestamp(),
        };
        let refresh = RefreshClaims {
            jti: Uuid::new_v4().simple().to_string(),
            iat,
            exp: (issued_at + self.refresh_ttl).timestamp(),
        };

        Ok(TokenPair {
            access_token: self.sign(&access)?,
            refresh_token: self.sign(&refresh)?,
        })
    }

    pub fn validate_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    pub fn validate_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Signature first, then expiry against the supplied clock.
    pub(crate) fn validate_at<T>(&self, token: &str, now: DateTime<Utc>) -> Result<T, TokenError>
    where
        T: DeserializeOwned + Expiring,
    {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<T>(token, &self.keys.dec, &validation).map_err(|err| {
            let mapped = match err.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            };
            tracing::debug!(error = %err, "token rejected");
            mapped
        })?;

        if now.timestamp() >= data.claims.exp() {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".into());
        encode(&header, claims, &self.keys.enc).map_err(|err| TokenError::Signing(err.to_string()))
    }
}
