use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::AppError;
use crate::shared::constants::MESSAGE_INVALID_QUERY;
use crate::shared::types::ErrorResponse;

/// Query string extractor with consistent error responses.
///
/// Repeated keys keep their first value, so `?keyword=a&keyword=b` reads as
/// `keyword=a`.
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppQueryRejection(rejection.body_text()))?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|err| AppQueryRejection(err.to_string()))
    }
}

pub struct AppQueryRejection(String);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected query string: {}", self.0);

        let body = Json(ErrorResponse {
            message: MESSAGE_INVALID_QUERY.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Path extractor with consistent error responses
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppPathRejection(rejection)),
        }
    }
}

pub struct AppPathRejection(PathRejection);

impl IntoResponse for AppPathRejection {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected path parameters: {}", self.0.body_text());

        // An identifier that cannot be decoded matches no stored region
        let error = match self.0 {
            PathRejection::FailedToDeserializePathParams(_) => AppError::DataNotFound,
            _ => AppError::Repository,
        };
        error.into_response()
    }
}
