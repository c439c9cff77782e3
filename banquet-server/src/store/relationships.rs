//! Relationship tag rows

use shared::models::RelationshipRecord;

use super::{CsvStore, StoreResult, read_rows, write_rows};
use crate::utils::time::now_iso;

/// relationships.csv 表头 (全小写)
pub(crate) const RELATIONSHIP_HEADERS: [&str; 5] =
    ["value", "label", "category", "order", "timestamp"];

impl CsvStore {
    /// 读取全部关系标签，按 `order` 升序返回
    pub async fn read_relationships(&self) -> StoreResult<Vec<RelationshipRecord>> {
        let mut tags: Vec<RelationshipRecord> =
            read_rows(&self.relationships_path(), None).await?;
        tags.sort_by_key(|t| t.order);
        Ok(tags)
    }

    /// 整文件替换关系标签
    ///
    /// order 为 0 的行按其位置补为 1-based 序号，空时间戳补为当前时间。
    pub async fn write_relationships(&self, tags: &[RelationshipRecord]) -> StoreResult<()> {
        let rows: Vec<RelationshipRecord> = tags
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, mut t)| {
                if t.order == 0 {
                    t.order = idx as u32 + 1;
                }
                if t.timestamp.is_empty() {
                    t.timestamp = now_iso();
                }
                t
            })
            .collect();
        write_rows(&self.relationships_path(), &RELATIONSHIP_HEADERS, &rows).await
    }
}
