use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::scrape_runs::LastScrapeResponse;
use crate::usecases::scrape_runs;
use axum::Json;

pub async fn last(ctx: RequestContext) -> ServiceResponse<LastScrapeResponse> {
    let last_run = scrape_runs::fetch_last(&ctx).await?;
    Ok(Json(LastScrapeResponse { last_run }))
}
