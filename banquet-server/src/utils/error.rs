//! 统一错误处理
//!
//! 提供应用级错误类型和响应映射：
//! - [`AppError`] - 应用错误枚举
//! - 所有错误经 `IntoResponse` 序列化为 `{success:false, error}` 结构
//!
//! # 传播策略
//!
//! 存储层错误原样冒泡到请求边界 (500)，不重试、不吞错；唯一允许的
//! 静默继续是存储层的"空白姓名行是占位符"规则。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::store::StoreError;
use crate::utils::AppResponse;

/// 应用错误枚举
///
/// | 分类 | HTTP |
/// |------|------|
/// | Unauthorized | 401 |
/// | Forbidden | 403 |
/// | NotFound | 404 |
/// | Conflict | 409 |
/// | Validation / Invalid | 400 |
/// | Store / Internal | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    /// 未登录 / 会话无效 (401)
    Unauthorized,

    #[error("Permission denied: {0}")]
    /// 无权限，验证未通过 (403)
    Forbidden(String),

    #[error("{0} not found")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("{0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("{0}")]
    /// 无效请求 (400)
    Invalid(String),

    #[error("Store error: {0}")]
    /// 存储读写失败 (500)
    Store(String),

    #[error("Internal error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    // ========== Convenient constructors ==========

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP 状态码映射
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        (status, Json(AppResponse::<()>::error(self.to_string()))).into_response()
    }
}
