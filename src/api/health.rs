use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, unexpected};
use axum::Json;
use serde::Serialize;

pub async fn index() -> &'static str {
    "gaatoday-service"
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health(ctx: RequestContext) -> ServiceResponse<HealthResponse> {
    match sqlx::query("SELECT 1").execute(&ctx.db).await {
        Ok(_) => Ok(Json(HealthResponse { status: "ok" })),
        Err(e) => unexpected(e),
    }
}
