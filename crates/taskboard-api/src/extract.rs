//! Extractors whose rejections render as `ApiError` envelopes

use axum::extract::{
    rejection::{FormRejection, PathRejection},
    FromRequest, FromRequestParts,
};
use tracing::debug;

use crate::error::ApiError;

/// `Path` whose parse failures are reported as not found.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

/// URL-encoded `Form` whose rejections are validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct AppForm<T>(pub T);

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Path rejected: {}", rejection.body_text());
        ApiError::NotFound("task".to_string())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
