//! Request Extractors
//!
//! Wrappers around axum's `Json`, `Path` and `Query` extractors whose
//! rejections come back as `ApiError`, so malformed bodies and parameters
//! get the same JSON error shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::api::error::ApiError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
