//! 桌台 API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::models::{TableCreate, TableLayout, TableNotesUpdate, TableRecord};

use crate::auth::AdminContext;
use crate::core::ServerState;
use crate::seating::{self, venue};
use crate::utils::validation::{MAX_NOTE_LEN, validate_text_len};
use crate::utils::{AppResponse, AppResult};

/// GET /api/tables - 获取全部桌台，按 (侧, 桌号) 排序
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<TableRecord>>>> {
    let tables = venue::list_tables(&state.store).await?;
    Ok(Json(AppResponse::success(tables)))
}

/// GET /api/tables/layout - 对账后的桌台/座位视图
///
/// 非管理员视图对姓名与电话验证码窗口脱敏。
pub async fn layout(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminContext>,
) -> AppResult<Json<AppResponse<Vec<TableLayout>>>> {
    let tables = state.store.read_tables().await?;
    let guests = state.store.read_guests().await?;
    let mut layout =
        seating::build_layout(&tables, &guests, state.config.default_seats_per_table);
    if !admin.is_admin() {
        seating::mask_layout(&mut layout);
    }
    Ok(Json(AppResponse::success(layout)))
}

/// POST /api/tables - 新增桌台 (仅管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<AppResponse<TableRecord>>> {
    validate_text_len(&payload.notes, "notes", MAX_NOTE_LEN)?;
    let table = venue::add_table(&state.store, payload).await?;
    Ok(Json(AppResponse::success(table)))
}

/// PUT /api/tables/{table_id} - 更新桌台备注 (仅管理员)
pub async fn update_notes(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<TableNotesUpdate>,
) -> AppResult<Json<AppResponse<TableRecord>>> {
    validate_text_len(&payload.notes, "notes", MAX_NOTE_LEN)?;
    let table = venue::update_notes(&state.store, &table_id, payload.notes).await?;
    Ok(Json(AppResponse::success(table)))
}

/// DELETE /api/tables/{table_id} - 删除桌台并级联宾客 (仅管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    venue::delete_table(&state.store, &table_id).await?;
    Ok(Json(AppResponse::ok()))
}
