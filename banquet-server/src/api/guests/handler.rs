//! 宾客 API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{GuestInfo, GuestRecord, MoveRequest, SeatRef};

use crate::auth::AdminContext;
use crate::core::ServerState;
use crate::seating::placement::{self, CleanupSummary};
use crate::utils::validation::{validate_guest, validate_seat};
use crate::utils::{AppError, AppResponse, AppResult};

/// GET /api/guests - 获取全部宾客记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<GuestRecord>>>> {
    let guests = state.store.read_guests().await?;
    Ok(Json(AppResponse::success(guests)))
}

/// 登记请求：宾客信息 + 目标座位，非管理员编辑占用座位时附验证码
#[derive(Debug, Deserialize)]
pub struct SaveGuestRequest {
    pub guest: GuestInfo,
    pub seat: SeatRef,
    #[serde(default)]
    pub verification: Option<String>,
}

/// POST /api/guests - 登记或更新座位上的宾客
///
/// 同一座位重复提交等效覆盖；非管理员覆盖占用座位需通过电话验证门。
pub async fn save(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminContext>,
    Json(req): Json<SaveGuestRequest>,
) -> AppResult<Json<AppResponse<GuestRecord>>> {
    let config = &state.config;
    validate_guest(&req.guest, config.phone_number_length)?;
    validate_seat(&req.seat, config.max_seats_per_table)?;

    if !admin.is_admin() {
        placement::check_seat_access(
            &state.store,
            &req.seat.id,
            &req.seat.table_id,
            req.verification.as_deref(),
        )
        .await?;
    }

    let record = placement::save_guest(&state.store, req.guest, &req.seat).await?;
    Ok(Json(AppResponse::success(record)))
}

#[derive(Debug, Deserialize)]
pub struct VerificationQuery {
    #[serde(default)]
    pub verification: Option<String>,
}

/// DELETE /api/guests/{seat_id}/{table_id} - 删除座位上的宾客
///
/// 座位本就为空时也返回成功；非管理员需通过电话验证门。
pub async fn delete_guest(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminContext>,
    Path((seat_id, table_id)): Path<(String, String)>,
    Query(query): Query<VerificationQuery>,
) -> AppResult<Json<AppResponse<()>>> {
    if !admin.is_admin() {
        placement::check_seat_access(
            &state.store,
            &seat_id,
            &table_id,
            query.verification.as_deref(),
        )
        .await?;
    }

    placement::delete_guest(&state.store, &seat_id, &table_id).await?;
    Ok(Json(AppResponse::ok()))
}

/// DELETE /api/guests - 清空全部宾客 (仅管理员)
pub async fn clear(State(state): State<ServerState>) -> AppResult<Json<AppResponse<()>>> {
    placement::clear_guests(&state.store).await?;
    Ok(Json(AppResponse::ok()))
}

/// POST /api/guests/cleanup - 清理占位行与同座重复记录 (仅管理员)
pub async fn cleanup(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<CleanupSummary>>> {
    let summary = placement::cleanup(&state.store).await?;
    Ok(Json(AppResponse::success(summary)))
}

/// POST /api/guests/move - 拖拽移动宾客 (仅管理员)
///
/// 目标座位必须为空；先写目标再删源，之后前端整体重新拉取对账。
pub async fn move_guest(
    State(state): State<ServerState>,
    Json(req): Json<MoveRequest>,
) -> AppResult<Json<AppResponse<GuestRecord>>> {
    validate_seat(&req.to, state.config.max_seats_per_table)?;
    let moved = placement::move_guest(&state.store, &req.from, &req.to).await?;
    Ok(Json(AppResponse::success(moved)))
}

/// 验证请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub seat_id: String,
    pub table_id: String,
    pub code: String,
}

#[derive(Debug, serde::Serialize)]
pub struct VerifyResult {
    pub verified: bool,
}

/// POST /api/guests/verify - 电话验证门的独立检查
///
/// 前端在打开编辑/删除弹窗前先行校验；座位为空时视为通过。
pub async fn verify(
    State(state): State<ServerState>,
    Json(req): Json<VerifyRequest>,
) -> AppResult<Json<AppResponse<VerifyResult>>> {
    let verified = match placement::check_seat_access(
        &state.store,
        &req.seat_id,
        &req.table_id,
        Some(req.code.as_str()),
    )
    .await
    {
        Ok(()) => true,
        Err(AppError::Forbidden(_) | AppError::Validation(_)) => false,
        Err(e) => return Err(e),
    };
    Ok(Json(AppResponse::success(VerifyResult { verified })))
}
