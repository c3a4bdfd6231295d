//! Extractor wrappers whose rejections render as `{"error": ...}` bodies.
//!
//! Axum's stock `Json`, `Path` and `Query` rejections are plain text; these
//! wrappers route them through [`AppError`] instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed input becomes 400 `Invalid request payload: ...`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters. Non-numeric ids become 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Typed query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
