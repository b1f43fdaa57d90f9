//! `Json`/`Query` extractors that reject with the API error envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, Extensions},
    Json,
};
use serde::de::DeserializeOwned;

use crate::middleware::RequestId;

use super::ApiError;

/// JSON request body; malformed or mistyped bodies become `bad_request`.
#[derive(Debug)]
pub(super) struct ApiJson<T>(pub T);

/// Query string; undecodable parameters become `bad_request`.
#[derive(Debug)]
pub(super) struct ApiQuery<T>(pub T);

fn request_id(extensions: &Extensions) -> String {
    extensions
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default()
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let req_id = request_id(req.extensions());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(bad_json(req_id, &rejection)),
        }
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(bad_query(request_id(&parts.extensions), &rejection)),
        }
    }
}

fn bad_json(req_id: String, rejection: &JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    ApiError::new(req_id, "bad_request", rejection.body_text())
}

fn bad_query(req_id: String, rejection: &QueryRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "rejected query string");
    ApiError::new(req_id, "bad_request", rejection.body_text())
}
