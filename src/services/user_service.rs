use sea_orm::Set;

use crate::{
    auth::{
        TokenIdentity, TokenService,
        password::{hash_password, verify_password},
    },
    db::{
        dao::{DaoBase, UserDao},
        entities::user,
    },
    error::AppError,
};

/// Same text for an unknown account and a wrong password.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub avatar: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
    tokens: TokenService,
}

impl UserService {
    pub fn new(user_dao: UserDao, tokens: TokenService) -> Self {
        Self { user_dao, tokens }
    }

    pub async fn list(&self) -> Result<Vec<user::Model>, AppError> {
        Ok(self.user_dao.list_all().await?)
    }

    pub async fn get(&self, user_id: &str) -> Result<user::Model, AppError> {
        Ok(self.user_dao.find_by_key(user_id).await?)
    }

    pub async fn signup(&self, input: SignupInput) -> Result<user::Model, AppError> {
        if self
            .user_dao
            .find_by_email_or_phone(&input.email, &input.phone)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("this email or phone number already exists"));
        }

        let password_hash = hash_password(&input.password)?;
        let model = user::ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            phone: Set(input.phone),
            avatar: Set(input.avatar),
            password_hash: Set(password_hash),
            token: Set(None),
            refresh_token: Set(None),
            ..Default::default()
        };
        let user = self.user_dao.create(model).await?;
        tracing::info!(user_id = %user.user_id, "user signed up");

        self.issue_tokens(user).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<user::Model, AppError> {
        let user = self
            .user_dao
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        self.issue_tokens(user).await
    }

    /// Trades the refresh token currently stored on a user for a new pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<user::Model, AppError> {
        self.tokens.validate_refresh(refresh_token)?;

        let user = self
            .user_dao
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| AppError::unauthorized("refresh token is no longer current"))?;

        self.issue_tokens(user).await
    }

    /// The pair is written before the caller sees it.
    async fn issue_tokens(&self, mut user: user::Model) -> Result<user::Model, AppError> {
        let pair = self.tokens.issue_pair(&TokenIdentity::from(&user))?;
        self.user_dao
            .update_tokens(&user.user_id, &pair.access_token, &pair.refresh_token)
            .await?;

        user.token = Some(pair.access_token);
        user.refresh_token = Some(pair.refresh_token);
        Ok(user)
    }
}
