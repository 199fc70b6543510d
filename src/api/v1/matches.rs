use crate::api::RequestContext;
use crate::common::axum_extract::{ApiPath, ApiQuery};
use crate::common::error::ServiceResponse;
use crate::models::listings::{MatchListArgs, MatchListing};
use crate::models::matches::Match;
use crate::usecases::matches;
use axum::Json;

pub async fn list(
    ctx: RequestContext,
    ApiQuery(args): ApiQuery<MatchListArgs>,
) -> ServiceResponse<MatchListing> {
    let listing = matches::fetch_listing(&ctx, args.sport, args.tab).await?;
    Ok(Json(listing))
}

pub async fn fetch_one(
    ctx: RequestContext,
    ApiPath(match_id): ApiPath<i64>,
) -> ServiceResponse<Match> {
    let fixture = matches::fetch_one(&ctx, match_id).await?;
    Ok(Json(fixture))
}
