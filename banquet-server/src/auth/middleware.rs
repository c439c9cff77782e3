//! 认证中间件
//!
//! 两层结构：全局 [`authenticate`] 负责解析身份，路由级
//! [`require_admin`] 负责准入。身份经请求扩展里的 [`AdminContext`]
//! 传递，处理器据此做验证门旁路与视图脱敏。

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::AdminSession;
use crate::core::ServerState;
use crate::utils::AppError;

/// 请求的管理员上下文，由 [`authenticate`] 注入每个请求
///
/// 令牌缺失或无效时内部为 `None`——匿名请求同样带有上下文，
/// 只是不是管理员。
#[derive(Clone, Debug, Default)]
pub struct AdminContext(pub Option<AdminSession>);

impl AdminContext {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

/// 全局认证中间件 - 从 `Authorization: Bearer <token>` 解析管理员会话
///
/// 从不拒绝请求：是否放行由各路由自行决定。
pub async fn authenticate(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = bearer_token(req.headers())
        .map(str::to_owned)
        .filter(|token| state.sessions.validate(token))
        .map(|token| AdminSession { token });
    req.extensions_mut().insert(AdminContext(session));
    next.run(req).await
}

/// 路由级准入中间件 - 要求有效的管理员会话
///
/// CORS 预检的 OPTIONS 请求直接放行；其余请求没有管理员会话时
/// 返回 401。
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }
    let is_admin = req
        .extensions()
        .get::<AdminContext>()
        .is_some_and(AdminContext::is_admin);
    if !is_admin {
        warn!("admin route rejected: {} {}", req.method(), req.uri());
        return Err(AppError::unauthorized());
    }
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::AUTHORIZATION,
            "Bearer abc123".parse().unwrap(),
        );
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(http::header::AUTHORIZATION, "Basic abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn anonymous_context_is_not_admin() {
        assert!(!AdminContext::default().is_admin());
        assert!(AdminContext(Some(AdminSession { token: "t".into() })).is_admin());
    }
}
