//! Guest rows

use shared::models::GuestRecord;

use super::{CsvStore, StoreResult, read_rows, write_rows};
use crate::utils::time::now_iso;

/// guests.csv 表头 (全小写)
pub(crate) const GUEST_HEADERS: [&str; 10] = [
    "name",
    "gender",
    "phone",
    "notes",
    "accommodation",
    "relationship",
    "tableid",
    "seatid",
    "seatnumber",
    "timestamp",
];

impl CsvStore {
    /// 读取全部宾客记录，空白姓名的占位行被丢弃
    pub async fn read_guests(&self) -> StoreResult<Vec<GuestRecord>> {
        read_rows(&self.guests_path(), Some("name")).await
    }

    /// 整文件替换宾客记录
    ///
    /// 空白姓名的行被过滤掉，空时间戳补为当前时间。
    pub async fn write_guests(&self, guests: &[GuestRecord]) -> StoreResult<()> {
        let rows: Vec<GuestRecord> = guests
            .iter()
            .filter(|g| !g.name.trim().is_empty())
            .cloned()
            .map(|mut g| {
                if g.timestamp.is_empty() {
                    g.timestamp = now_iso();
                }
                g
            })
            .collect();
        write_rows(&self.guests_path(), &GUEST_HEADERS, &rows).await
    }
}
