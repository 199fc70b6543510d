pub mod live;
pub mod matches;
pub mod scrapes;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/matches", get(matches::list))
        .route("/matches/{match_id}", get(matches::fetch_one))
        .route("/matches/{match_id}/updates", get(live::updates))
        .route("/live", get(live::board))
        .route("/scrapes/last", get(scrapes::last))
}
