//! Contractor CRUD and export handlers for the REST API.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_core::export::csv::{export_file_name, to_csv};
use roster_core::view;
use roster_types::contractor::{Contractor, ContractorId, ContractorInput};
use roster_types::view::{SortState, ViewStats};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::extractors::query::ContractorListQuery;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Projected list plus the counters and the sort state that produced it.
#[derive(Debug, Serialize)]
pub struct ContractorList {
    pub contractors: Vec<Contractor>,
    pub stats: ViewStats,
    pub sort: SortState,
}

/// Result of a mutation: the affected record (if any) and the full list.
#[derive(Debug, Serialize)]
pub struct ContractorMutation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<Contractor>,
    pub contractors: Vec<Contractor>,
    /// False when the slot write failed and the change lives only in memory.
    pub saved: bool,
}

/// Result of a delete request.
#[derive(Debug, Serialize)]
pub struct ContractorRemoval {
    pub removed: bool,
    pub contractors: Vec<Contractor>,
    pub saved: bool,
}

fn parse_id(raw: &str) -> Result<ContractorId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid contractor id '{raw}'")))
}

/// GET /api/v1/contractors - Search, filter and sort the list.
pub async fn list_contractors(
    State(state): State<AppState>,
    Query(params): Query<ContractorListQuery>,
) -> Result<ApiResponse<ContractorList>, AppError> {
    let timer = RequestTimer::start();
    let query = params.to_view_query()?;

    let registry = state.registry.lock().await;
    let records = registry.records();
    let shown = view::project(records, &query);
    let stats = view::stats(records, shown.len());

    let data = ContractorList {
        contractors: shown.into_iter().cloned().collect(),
        stats,
        sort: query.sort,
    };

    Ok(timer
        .finish(data)
        .with_link("self", "/api/v1/contractors")
        .with_link("export", "/api/v1/contractors/export"))
}

/// POST /api/v1/contractors - Add a contractor.
pub async fn create_contractor(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ContractorInput>,
) -> Result<(StatusCode, ApiResponse<ContractorMutation>), AppError> {
    let timer = RequestTimer::start();

    let mut registry = state.registry.lock().await;
    let contractors = registry.add(body).await?.to_vec();
    let created = contractors.last().cloned();
    let link = created
        .as_ref()
        .map(|c| format!("/api/v1/contractors/{}", c.id))
        .unwrap_or_default();

    let data = ContractorMutation {
        contractor: created,
        contractors,
        saved: !registry.is_dirty(),
    };

    Ok((StatusCode::CREATED, timer.finish(data).with_link("self", link)))
}

/// GET /api/v1/contractors/{id} - Get one contractor.
pub async fn get_contractor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Contractor>, AppError> {
    let timer = RequestTimer::start();
    let id = parse_id(&id)?;

    let registry = state.registry.lock().await;
    let contractor = registry.get(id)?.clone();

    Ok(timer
        .finish(contractor)
        .with_link("self", format!("/api/v1/contractors/{id}")))
}

/// PUT /api/v1/contractors/{id} - Replace a contractor's content fields.
pub async fn update_contractor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<ContractorInput>,
) -> Result<ApiResponse<ContractorMutation>, AppError> {
    let timer = RequestTimer::start();
    let id = parse_id(&id)?;

    let mut registry = state.registry.lock().await;
    let contractors = registry.update(id, body).await?.to_vec();
    let updated = contractors.iter().find(|c| c.id == id).cloned();

    let data = ContractorMutation {
        contractor: updated,
        contractors,
        saved: !registry.is_dirty(),
    };

    Ok(timer
        .finish(data)
        .with_link("self", format!("/api/v1/contractors/{id}")))
}

/// DELETE /api/v1/contractors/{id} - Remove a contractor. A missing id is
/// reported with `removed: false`, not an error.
pub async fn delete_contractor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<ContractorRemoval>, AppError> {
    let timer = RequestTimer::start();
    let id = parse_id(&id)?;

    let mut registry = state.registry.lock().await;
    let removed = registry.contains(id);
    let contractors = registry.remove(id).await.to_vec();

    let data = ContractorRemoval {
        removed,
        contractors,
        saved: !registry.is_dirty(),
    };

    Ok(timer.finish(data).with_link("list", "/api/v1/contractors"))
}

/// GET /api/v1/contractors/export - Download the projected list as CSV.
pub async fn export_contractors(
    State(state): State<AppState>,
    Query(params): Query<ContractorListQuery>,
) -> Result<Response, AppError> {
    let query = params.to_view_query()?;

    let csv = {
        let registry = state.registry.lock().await;
        let shown = view::project(registry.records(), &query);
        to_csv(shown.iter().copied())
    };

    let file_name = export_file_name(
        &state.config.export.file_prefix,
        chrono::Utc::now().date_naive(),
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv;charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
