use axum::{
    extract::{Path, State},
    Extension, Json,
};
use laundro_core::{BranchRecord, DirectorySession, FilterCriteria};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{extract::ApiQuery, ApiError, ApiResponse, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct BranchListQuery {
    pub district: Option<String>,
    pub hours: Option<String>,
    /// Comma-separated service keys; every one must be offered.
    pub services: Option<String>,
    pub q: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct BranchListData {
    pub branches: Vec<BranchRecord>,
    pub total: usize,
    pub criteria: FilterCriteria,
    pub selected: Option<BranchRecord>,
    pub map_locator: String,
}

#[derive(Debug, Serialize)]
pub(super) struct BranchDetailData {
    pub branch: BranchRecord,
    pub map_locator: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MapQuery {
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct MapData {
    /// The branch the locator belongs to; `None` for the city-wide default.
    pub branch_id: Option<String>,
    pub locator: String,
}

pub(super) async fn list_branches(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(params): ApiQuery<BranchListQuery>,
) -> Json<ApiResponse<BranchListData>> {
    let mut session = DirectorySession::new(&state.directory);
    session.set_criteria(FilterCriteria::from_parts(
        params.district.as_deref(),
        params.hours.as_deref(),
        params.services.as_deref(),
        params.q.as_deref(),
    ));
    if let Some(id) = params.selected.filter(|id| !id.trim().is_empty()) {
        session.select(id);
    }

    let branches: Vec<BranchRecord> = session.visible().into_iter().cloned().collect();
    tracing::debug!(
        visible = branches.len(),
        unconstrained = session.criteria().is_unconstrained(),
        "filtered branch directory"
    );

    let data = BranchListData {
        total: branches.len(),
        branches,
        criteria: session.criteria().clone(),
        selected: session.current_selection().cloned(),
        map_locator: session.map_locator().to_string(),
    };

    ApiResponse::new(data, req_id.0)
}

pub(super) async fn list_districts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    ApiResponse::new(state.directory.catalog.districts().to_vec(), req_id.0)
}

pub(super) async fn list_services(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    ApiResponse::new(state.directory.catalog.all_services().to_vec(), req_id.0)
}

pub(super) async fn get_branch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BranchDetailData>>, ApiError> {
    let mut session = DirectorySession::new(&state.directory);
    session.select(id.as_str());

    let Some(branch) = session.current_selection() else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("branch '{id}' not found"),
        ));
    };

    let data = BranchDetailData {
        branch: branch.clone(),
        map_locator: session.map_locator().to_string(),
    };

    Ok(ApiResponse::new(data, req_id.0))
}

/// Resolves the map embed for `?branch=`. Unknown or missing ids get the
/// default locator rather than an error.
pub(super) async fn resolve_map(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(params): ApiQuery<MapQuery>,
) -> Json<ApiResponse<MapData>> {
    let mut session = DirectorySession::new(&state.directory);
    if let Some(id) = params.branch {
        session.select(id);
    }

    let data = MapData {
        branch_id: session.current_selection().map(|b| b.id.clone()),
        locator: session.map_locator().to_string(),
    };

    ApiResponse::new(data, req_id.0)
}
