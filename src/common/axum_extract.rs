use crate::common::error::AppError;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::warn;

/// [`Query`] that rejects with [`AppError::DecodingRequestFailed`].
pub struct ApiQuery<T>(pub T);

/// [`Path`] that rejects with [`AppError::DecodingRequestFailed`].
pub struct ApiPath<T>(pub T);

impl<S: Sync + Send, T: DeserializeOwned + Send> FromRequestParts<S> for ApiQuery<T> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(e) => {
                warn!(uri = %parts.uri, "Rejected query string: {}", e.body_text());
                Err(AppError::DecodingRequestFailed)
            }
        }
    }
}

impl<S: Sync + Send, T: DeserializeOwned + Send> FromRequestParts<S> for ApiPath<T> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(e) => {
                warn!(uri = %parts.uri, "Rejected path: {}", e.body_text());
                Err(AppError::DecodingRequestFailed)
            }
        }
    }
}
