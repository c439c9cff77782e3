//! 管理员认证 Handlers

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::AdminContext;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/login - 管理员登录
///
/// 校验配置中的管理员凭据，签发会话令牌。
/// 统一的失败消息，不区分用户名/密码错误。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let config = &state.config;
    if req.username != config.admin_username || req.password != config.admin_password {
        warn!("admin login failed for username \"{}\"", req.username);
        return Err(AppError::forbidden("invalid username or password"));
    }

    let token = state.sessions.issue();
    info!("admin login succeeded");
    Ok(Json(AppResponse::success(LoginResponse { token })))
}

/// POST /api/auth/logout - 吊销当前会话令牌
pub async fn logout(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminContext>,
) -> AppResult<Json<AppResponse<()>>> {
    let Some(session) = admin.0 else {
        return Err(AppError::unauthorized());
    };
    state.sessions.revoke(&session.token);
    Ok(Json(AppResponse::ok()))
}
