use crate::config::Config;
use crate::mail::Mailer;
use crate::reset_tokens::ResetTokenCache;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared per-process state, built once in `main` and handed to every
/// handler through `axum::extract::State`.
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub reset_tokens: ResetTokenCache,
    pub mailer: Mailer,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config, mailer: Mailer) -> SharedState {
        Arc::new(Self {
            db,
            config,
            reset_tokens: ResetTokenCache::new(),
            mailer,
        })
    }
}
