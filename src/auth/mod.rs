pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{AccessClaims, RefreshClaims, TokenIdentity, TokenPair};
pub use jwt::{TokenError, TokenService};
pub use password::CredentialError;
