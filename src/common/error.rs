use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    MatchesNotFound,
    MatchesMissingTeamName,
    MatchesStoreRejected,

    LiveUpdatesUnrecognisedText,
    LiveUpdatesMatchNotFound,
    LiveUpdatesMatchFinished,
    LiveUpdatesOutOfOrder,
    LiveUpdatesDuplicate,

    SourcesUnavailable,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::MatchesNotFound => "matches.not_found",
            AppError::MatchesMissingTeamName => "matches.missing_team_name",
            AppError::MatchesStoreRejected => "matches.store_rejected",

            AppError::LiveUpdatesUnrecognisedText => "live_updates.unrecognised_text",
            AppError::LiveUpdatesMatchNotFound => "live_updates.match_not_found",
            AppError::LiveUpdatesMatchFinished => "live_updates.match_finished",
            AppError::LiveUpdatesOutOfOrder => "live_updates.out_of_order",
            AppError::LiveUpdatesDuplicate => "live_updates.duplicate",

            AppError::SourcesUnavailable => "sources.unavailable",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::MatchesNotFound => "The match could not be found.",
            AppError::MatchesMissingTeamName => "A match needs both a home and an away team.",
            AppError::MatchesStoreRejected => "The store refused to save the match.",

            AppError::LiveUpdatesUnrecognisedText => {
                "The commentary does not contain a minute and score line."
            }
            AppError::LiveUpdatesMatchNotFound => "No match is scheduled for these teams.",
            AppError::LiveUpdatesMatchFinished => "The match has already finished.",
            AppError::LiveUpdatesOutOfOrder => "The update is older than the latest one.",
            AppError::LiveUpdatesDuplicate => "The update has already been recorded.",

            AppError::SourcesUnavailable => "The match source could not be read.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::MatchesMissingTeamName
            | AppError::LiveUpdatesUnrecognisedText => StatusCode::BAD_REQUEST,

            AppError::MatchesNotFound | AppError::LiveUpdatesMatchNotFound => {
                StatusCode::NOT_FOUND
            }

            AppError::LiveUpdatesMatchFinished
            | AppError::LiveUpdatesOutOfOrder
            | AppError::LiveUpdatesDuplicate => StatusCode::CONFLICT,

            AppError::MatchesStoreRejected => StatusCode::UNPROCESSABLE_ENTITY,

            AppError::SourcesUnavailable => StatusCode::BAD_GATEWAY,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
