//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理员登录/登出
//! - [`guests`] - 宾客登记、删除、移动、验证
//! - [`tables`] - 桌台管理与对账视图
//! - [`relationships`] - 关系标签管理
//!
//! 所有响应统一为 `{success, data?, error?}` 结构。

pub mod auth;
pub mod guests;
pub mod health;
pub mod relationships;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
