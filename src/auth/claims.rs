use serde::{Deserialize, Serialize};

use crate::db::entities::user;

/// Who the access token speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
}

impl From<&user::Model> for TokenIdentity {
    fn from(user: &user::Model) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            uid: user.user_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    pub fn identity(&self) -> TokenIdentity {
        TokenIdentity {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            uid: self.uid.clone(),
        }
    }
}

/// No identity claims. `jti` only keeps two pairs minted in the same second
/// from producing the same refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub(crate) trait Expiring {
    fn exp(&self) -> i64;
}

impl Expiring for AccessClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}

impl Expiring for RefreshClaims {
    fn exp(&self) -> i64 {
        self.exp
    }
}
