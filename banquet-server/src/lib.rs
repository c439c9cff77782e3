//! Banquet Seating Server - 宴会座位管理服务
//!
//! # 架构概述
//!
//! CSV 文件是唯一的数据源；每个修改操作都是 读全量 → 内存变换 →
//! 写全量，修改后前端重新拉取并对账，服务端不保留跨请求的权威状态。
//!
//! # 模块结构
//!
//! ```text
//! banquet-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 管理员会话与中间件
//! ├── store/         # CSV 存储层 (Record Access Layer)
//! ├── seating/       # 座位域逻辑 (对账、落座协议、桌台、标签)
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、时间、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod seating;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app, build_router};
pub use crate::store::{CsvStore, StoreError};
pub use crate::utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境：加载 .env，初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());
    Ok(())
}
