//! 关系标签 API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    RelationshipCreate, RelationshipRecord, RelationshipReorder, RelationshipUpdate,
};

use crate::core::ServerState;
use crate::seating::taxonomy;
use crate::utils::{AppResponse, AppResult};

/// GET /api/relationships - 获取全部标签，按 order 升序
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<RelationshipRecord>>>> {
    let tags = state.store.read_relationships().await?;
    Ok(Json(AppResponse::success(tags)))
}

/// POST /api/relationships - 新增标签 (仅管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RelationshipCreate>,
) -> AppResult<Json<AppResponse<RelationshipRecord>>> {
    let tag = taxonomy::add_relationship(&state.store, payload).await?;
    Ok(Json(AppResponse::success(tag)))
}

/// PUT /api/relationships/{value} - 更新标签 (仅管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(value): Path<String>,
    Json(payload): Json<RelationshipUpdate>,
) -> AppResult<Json<AppResponse<RelationshipRecord>>> {
    let tag = taxonomy::update_relationship(&state.store, &value, payload).await?;
    Ok(Json(AppResponse::success(tag)))
}

/// DELETE /api/relationships/{value} - 删除标签 (仅管理员)
///
/// 引用该标签的宾客记录保持不变。
pub async fn delete(
    State(state): State<ServerState>,
    Path(value): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    taxonomy::delete_relationship(&state.store, &value).await?;
    Ok(Json(AppResponse::ok()))
}

/// PUT /api/relationships/reorder - 整体重排序 (仅管理员)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<RelationshipReorder>,
) -> AppResult<Json<AppResponse<Vec<RelationshipRecord>>>> {
    let tags = taxonomy::reorder_relationships(&state.store, payload.relationships).await?;
    Ok(Json(AppResponse::success(tags)))
}
