//! Group listing and creation handlers.
//!
//! These are the only write/read paths in the service: one bounded scan per
//! list request, one conditional insert per create request.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use groups_core::group::{CreateGroupRequest, Group};
use groups_core::pagination::{decode_next_key, encode_next_key, parse_limit};
use groups_core::storage::ScanKey;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing groups.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGroupsQuery {
    /// Page size; kept as raw text until validated.
    pub limit: Option<String>,
    /// URI-encoded JSON continuation token from a previous page.
    pub next_key: Option<String>,
}

impl ListGroupsQuery {
    /// Validates both parameters. Fails before any scan is issued.
    fn parse(&self) -> Result<(i32, Option<ScanKey>), AppError> {
        let limit = parse_limit(self.limit.as_deref())?;
        let start_key = self.next_key.as_deref().map(decode_next_key).transpose()?;
        Ok((limit, start_key))
    }
}

/// One page of groups plus the continuation token for the next page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPage {
    pub items: Vec<Group>,
    /// `null` once the scan has reached the end of the table.
    pub next_key: Option<String>,
}

/// List groups (GET /groups).
///
/// Issues exactly one bounded scan and passes the store's resume position
/// back to the client as an opaque token.
pub async fn list_groups(
    State(state): State<AppState>,
    Query(query): Query<ListGroupsQuery>,
) -> Result<Json<GroupPage>, AppError> {
    let (limit, start_key) = query.parse()?;

    let page = state.group_repo.scan_groups(limit, start_key).await?;

    Ok(Json(GroupPage {
        next_key: encode_next_key(page.last_key.as_ref()),
        items: page.items,
    }))
}

/// Create a new group (POST /groups).
///
/// The payload shape is enforced by the `Json` extractor before this runs;
/// a body without a `name` never reaches the handler.
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let group = payload.into_group();

    state.group_repo.create_group(&group).await?;

    tracing::info!(group_id = %group.id, "Created new group");

    Ok((StatusCode::CREATED, Json(group)))
}
