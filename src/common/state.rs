use crate::common::context::Context;
use sqlx::{Pool, Sqlite};
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    /// Advertised to display clients as the minimum delay between live polls.
    pub live_poll_interval: Duration,
}

impl Context for AppState {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}
