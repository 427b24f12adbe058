//! JSON body extractor whose rejections use the API error envelope.

use axum::extract::FromRequest;

use crate::http::error::AppError;

/// Drop-in for `axum::Json` on request bodies. A malformed body, a missing
/// `Content-Type: application/json` header, or a wrongly typed field
/// becomes a 400 `VALIDATION_ERROR` envelope instead of plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
