//! 服务器配置

use std::path::PathBuf;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | ./data | CSV 数据目录 |
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DEFAULT_SEATS_PER_TABLE | 12 | 每桌默认座位数 |
/// | TABLES_PER_SIDE | 11 | 每侧初始桌数 |
/// | TOTAL_TABLES | 22 | 初始总桌数 |
/// | MAX_SEATS_PER_TABLE | 16 | 单桌座位号上限 |
/// | PHONE_NUMBER_LENGTH | 11 | 电话号码位数 |
/// | ADMIN_USERNAME | root | 管理员用户名 |
/// | ADMIN_PASSWORD | root | 管理员密码 |
///
/// 日志由 [`crate::setup_environment`] 初始化，`LOG_DIR` 在那里读取。
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/srv/banquet HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV 数据目录
    pub data_dir: PathBuf,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,

    // === 座位布局 ===
    /// 每桌默认座位数 (超出部分按宾客座位号惰性扩展)
    pub default_seats_per_table: u32,
    /// 初始化时每侧的桌数
    pub tables_per_side: u32,
    /// 初始化时的总桌数
    pub total_tables: u32,
    /// 单桌允许的最大座位号
    pub max_seats_per_table: u32,

    // === 校验 ===
    /// 电话号码位数
    pub phone_number_length: usize,

    // === 管理员 ===
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            http_port: env_parse("HTTP_PORT", defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            default_seats_per_table: env_parse(
                "DEFAULT_SEATS_PER_TABLE",
                defaults.default_seats_per_table,
            ),
            tables_per_side: env_parse("TABLES_PER_SIDE", defaults.tables_per_side),
            total_tables: env_parse("TOTAL_TABLES", defaults.total_tables),
            max_seats_per_table: env_parse("MAX_SEATS_PER_TABLE", defaults.max_seats_per_table),
            phone_number_length: env_parse("PHONE_NUMBER_LENGTH", defaults.phone_number_length),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment != "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            http_port: 3001,
            environment: "development".into(),
            default_seats_per_table: 12,
            tables_per_side: 11,
            total_tables: 22,
            max_seats_per_table: 16,
            phone_number_length: 11,
            admin_username: "root".into(),
            admin_password: "root".into(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
