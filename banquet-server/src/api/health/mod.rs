//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/health | GET | 健康检查 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "success": true,
//!   "data": {
//!     "message": "Banquet seating server is running",
//!     "version": "0.1.0",
//!     "timestamp": "2026-08-06T12:00:00.000Z"
//!   }
//! }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResponse;
use crate::utils::time::now_iso;

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthInfo {
    message: &'static str,
    version: &'static str,
    timestamp: String,
}

/// 基础健康检查
pub async fn health() -> Json<AppResponse<HealthInfo>> {
    Json(AppResponse::success(HealthInfo {
        message: "Banquet seating server is running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_iso(),
    }))
}
