use crate::common::env::FromEnv;
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

pub struct AppSettings {
    pub app_component: String,
    pub level: Level,
    pub log_json: bool,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: u32,
    pub db_wait_timeout: Duration,

    /// Calendar year every scraped date is interpreted in.
    pub season_year: i32,
    pub raw_match_source: String,
    pub live_commentary_source: Option<String>,
    pub ingest_interval: Duration,
    pub live_poll_interval: Duration,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let app_component = env::var("APP_COMPONENT")?;
        let level = Level::from_env("LOG_LEVEL")?;
        let log_json = bool::from_env_or("LOG_JSON", false)?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let database_url = env::var("DATABASE_URL")?;
        let db_max_connections = u32::from_env("DB_MAX_CONNECTIONS")?;
        let db_wait_timeout_secs = u64::from_env("DB_WAIT_TIMEOUT_SECS")?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        let season_year = i32::from_env_or("SEASON_YEAR", 2025)?;
        let raw_match_source = env::var("RAW_MATCH_SOURCE")?;
        let live_commentary_source = env::var("LIVE_COMMENTARY_SOURCE").ok();
        let ingest_interval_secs = u64::from_env_or("INGEST_INTERVAL_SECS", 60 * 60)?;
        let ingest_interval = Duration::from_secs(ingest_interval_secs);
        let live_poll_interval_secs = u64::from_env_or("LIVE_POLL_INTERVAL_SECS", 30)?;
        let live_poll_interval = Duration::from_secs(live_poll_interval_secs);

        Ok(AppSettings {
            app_component,
            level,
            log_json,
            app_port,
            app_host,

            database_url,
            db_max_connections,
            db_wait_timeout,

            season_year,
            raw_match_source,
            live_commentary_source,
            ingest_interval,
            live_poll_interval,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}
