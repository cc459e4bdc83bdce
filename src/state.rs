use std::sync::Arc;

use crate::{auth::TokenService, config::AppConfig, db::Store};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Store, tokens: TokenService) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            tokens,
        })
    }
}
