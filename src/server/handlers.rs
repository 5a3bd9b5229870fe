//! Request handlers.
//!
//! Input is validated into the typed descriptors of `tracker-lib` before
//! reaching the store or the query engine; malformed bodies and query
//! strings are rejected here.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use tracker_lib::model::{Deportment, Issue, SortField, SortOrder};
use tracker_lib::query::{self, IssueQuery, IssueUpdate, SearchResult};
use tracker_lib::store::NewIssue;

use super::AppState;
use super::error::ApiError;

const DEFAULT_PER_PAGE: u32 = 10;
const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
}

pub async fn root_health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "I am Root",
    })
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

// ============================================================================
// Issues
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub category_id: String,
    #[serde(default)]
    pub assignee_name: Option<String>,
}

pub async fn create_issue(
    State(state): State<AppState>,
    payload: Result<Json<CreateIssueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;

    let mut store = state.store().write().await;
    let issue = store.create(&NewIssue {
        title: req.title,
        category_id: req.category_id,
        assignee_name: req.assignee_name,
    })?;

    info!(id = %issue.id, category_id = %issue.category_id, "created issue");
    Ok((StatusCode::CREATED, Json(issue)))
}

pub async fn list_issues(State(state): State<AppState>) -> Json<Vec<Issue>> {
    let store = state.store().read().await;
    Json(store.list_active().into_iter().cloned().collect())
}

pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Issue>, ApiError> {
    let store = state.store().read().await;
    Ok(Json(store.get(&id)?.clone()))
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateIssueRequest {
    pub title: Option<String>,
    pub category_id: Option<String>,
    pub assignee_name: Option<String>,
}

pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateIssueRequest>, JsonRejection>,
) -> Result<Json<Issue>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;

    let mut store = state.store().write().await;
    let issue = store.update(
        &id,
        &IssueUpdate {
            title: req.title,
            category_id: req.category_id,
            assignee_name: req.assignee_name,
        },
    )?;

    info!(id = %issue.id, "updated issue");
    Ok(Json(issue))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store().write().await;
    store.soft_delete(&id)?;

    info!(id = %id, "soft-deleted issue");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Deportments
// ============================================================================

pub async fn list_deportments(State(state): State<AppState>) -> Json<Vec<Deportment>> {
    let store = state.store().read().await;
    Json(store.catalog().list().to_vec())
}

pub async fn get_deportment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deportment>, ApiError> {
    let store = state.store().read().await;
    store
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Deportment not found: {id}")))
}

// ============================================================================
// Search
// ============================================================================

/// Raw search parameters as they arrive on the query string.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub category_id: Option<String>,
    pub assignee_name: Option<String>,
    pub title_contains: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub include_stats: Option<bool>,
}

impl SearchParams {
    /// Validate into a typed query descriptor.
    fn into_query(self) -> Result<IssueQuery, ApiError> {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(SortField::from_str)
            .transpose()?;
        let order = match self.order.as_deref() {
            None => SortOrder::Asc,
            Some(raw) => raw.parse()?,
        };

        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(ApiError::invalid_request("page must be >= 1"));
        }
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(ApiError::invalid_request(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        Ok(IssueQuery {
            category_id: self.category_id,
            assignee_name: self.assignee_name,
            title_contains: self.title_contains,
            sort_by,
            order,
            page,
            per_page,
            include_stats: self.include_stats.unwrap_or(false),
        })
    }
}

pub async fn search_issues(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResult>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;
    let query = params.into_query()?;

    let store = state.store().read().await;
    let result = query::search(&store.list_active(), &query)?;
    Ok(Json(result))
}
