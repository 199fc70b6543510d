use anyhow::bail;
use gaatoday_service::api;
use gaatoday_service::common::init;
use gaatoday_service::settings::AppSettings;
use gaatoday_service::workers::crons;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(&settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "ingest-cron" => crons::ingest_cron::serve(settings).await,
        "live-cron" => crons::live_cron::serve(settings).await,
        component => bail!("Unknown app component {component}"),
    }
}
