//! Table rows

use shared::models::TableRecord;

use super::{CsvStore, StoreResult, read_rows, write_rows};
use crate::utils::time::now_iso;

/// tables.csv 表头 (全小写)
pub(crate) const TABLE_HEADERS: [&str; 5] =
    ["tableid", "displaynumber", "side", "notes", "timestamp"];

impl CsvStore {
    /// 读取全部桌台记录 (文件顺序)
    pub async fn read_tables(&self) -> StoreResult<Vec<TableRecord>> {
        read_rows(&self.tables_path(), None).await
    }

    /// 整文件替换桌台记录，空时间戳补为当前时间
    pub async fn write_tables(&self, tables: &[TableRecord]) -> StoreResult<()> {
        let rows: Vec<TableRecord> = tables
            .iter()
            .cloned()
            .map(|mut t| {
                if t.timestamp.is_empty() {
                    t.timestamp = now_iso();
                }
                t
            })
            .collect();
        write_rows(&self.tables_path(), &TABLE_HEADERS, &rows).await
    }
}
