//! 服务器状态

use crate::auth::SessionService;
use crate::core::Config;
use crate::store::{self, CsvStore};

/// 服务器状态 - 显式传递的应用状态，没有全局单例
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | CSV 存储 (只持路径，文件即权威状态) |
/// | sessions | 管理员会话令牌表 |
///
/// 克隆成本低 (路径 + Arc)，每个请求处理器拿到的是同一份共享状态。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: CsvStore,
    pub sessions: SessionService,
}

impl ServerState {
    /// 初始化服务器状态：建存储、播种数据文件
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store = CsvStore::new(&config.data_dir);
        store::initialize(&store, config).await?;
        Ok(Self {
            config: config.clone(),
            store,
            sessions: SessionService::new(),
        })
    }
}
