//! Application error type mapping to HTTP status codes and envelope format.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use roster_types::error::ContractorError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Contractor registry errors.
    Contractor(ContractorError),
    /// Malformed request parameter.
    Validation(String),
}

impl From<ContractorError> for AppError {
    fn from(e: ContractorError) -> Self {
        AppError::Contractor(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Contractor(ContractorError::Validation(_)) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Contractor(ContractorError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Contractor(ContractorError::IdsExhausted(_)) => StatusCode::CONFLICT,
            AppError::Contractor(ContractorError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope error entries: one per offending field for validation
    /// failures, a single entry otherwise.
    fn error_entries(&self) -> Vec<serde_json::Value> {
        match self {
            AppError::Contractor(ContractorError::Validation(fields)) => fields
                .iter()
                .map(|f| {
                    json!({
                        "code": "VALIDATION_ERROR",
                        "message": f.message,
                        "details": { "field": f.field },
                    })
                })
                .collect(),
            AppError::Contractor(ContractorError::NotFound(id)) => vec![json!({
                "code": "CONTRACTOR_NOT_FOUND",
                "message": format!("Contractor {id} not found"),
            })],
            AppError::Contractor(e @ ContractorError::IdsExhausted(_)) => vec![json!({
                "code": "IDS_EXHAUSTED",
                "message": e.to_string(),
            })],
            AppError::Contractor(e @ ContractorError::Storage(_)) => vec![json!({
                "code": "STORAGE_ERROR",
                "message": e.to_string(),
            })],
            AppError::Validation(msg) => vec![json!({
                "code": "VALIDATION_ERROR",
                "message": msg,
            })],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let body = json!({
            "data": null,
            "meta": {
                "request_id": uuid::Uuid::now_v7().to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": self.error_entries(),
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::contractor::{ContractorField, ContractorId};
    use roster_types::error::FieldError;

    #[test]
    fn test_status_mapping() {
        let validation = AppError::from(ContractorError::Validation(vec![]));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        let missing = AppError::from(ContractorError::NotFound(ContractorId(9)));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let storage = AppError::from(ContractorError::Storage("disk full".into()));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let exhausted = AppError::from(ContractorError::IdsExhausted(ContractorId(i64::MAX)));
        assert_eq!(exhausted.status(), StatusCode::CONFLICT);
        assert_eq!(exhausted.error_entries()[0]["code"], "IDS_EXHAUSTED");
    }

    #[test]
    fn test_validation_lists_each_field() {
        let err = AppError::from(ContractorError::Validation(vec![
            FieldError::new(ContractorField::Name, "Name is required"),
            FieldError::new(ContractorField::ContactNumber, "Contact number is required"),
        ]));
        let entries = err.error_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["details"]["field"], "name");
        assert_eq!(entries[1]["details"]["field"], "contactNo");
        assert_eq!(entries[1]["message"], "Contact number is required");
    }
}
