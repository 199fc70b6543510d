use crate::common::state::AppState;
use crate::repositories::schema;
use crate::settings::AppSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

pub fn initialize_logging(settings: &AppSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true);
    match settings.log_json {
        true => subscriber.json().init(),
        false => subscriber.compact().init(),
    }
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = initialize_db(
        &settings.database_url,
        settings.db_max_connections,
        settings.db_wait_timeout,
    )
    .await?;
    schema::migrate(&db).await?;
    Ok(AppState {
        db,
        live_poll_interval: settings.live_poll_interval,
    })
}

pub async fn initialize_db(
    database_url: &str,
    max_connections: u32,
    wait_timeout: Duration,
) -> sqlx::Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .acquire_timeout(wait_timeout)
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
