//! 管理员会话认证
//!
//! 原型部署只有一组硬编码管理员凭据 (环境变量覆盖)，认证产物是
//! 内存中的不透明会话令牌——没有用户体系，也不需要持久化。
//!
//! - [`SessionService`] - 令牌签发/校验/吊销
//! - [`authenticate`] - 全局中间件：解析 Bearer 令牌并注入 [`AdminContext`]
//! - [`require_admin`] - 路由级中间件：管理员专属路由的守门

pub mod middleware;
pub mod session;

pub use middleware::{AdminContext, authenticate, require_admin};
pub use session::{AdminSession, SessionService};
