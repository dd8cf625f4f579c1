//! Extractors whose rejections render as [`ApiError`] bodies.
//!
//! axum's own `Json` and `Query` reject with plain text, which the page
//! cannot show next to the form.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON request body; malformed or mistyped input becomes a warning
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Query string; undecodable parameters become a warning
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);
