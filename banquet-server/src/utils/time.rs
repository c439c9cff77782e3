//! 时间工具函数
//!
//! 所有记录时间戳统一为 RFC3339 毫秒精度字符串 (UTC)，
//! 与历史数据文件中的 `2025-06-01T09:30:00.000Z` 形式一致。

use chrono::{SecondsFormat, Utc};

/// 当前时间 → RFC3339 毫秒字符串，如 `2026-08-06T12:00:00.000Z`
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
