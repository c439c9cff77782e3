//! 桌台管理
//!
//! tableid 是稳定主键 (`table_<n>`，n 取现有最大序号 + 1)；
//! displaynumber 只在侧内唯一，作展示用。

use shared::models::{Side, TableCreate, TableRecord};
use tracing::info;

use crate::store::CsvStore;
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppResult};

/// 下一个桌台 id：现有数字后缀最大值 + 1
pub fn next_table_id(tables: &[TableRecord]) -> String {
    let max = tables
        .iter()
        .filter_map(|t| t.table_id.strip_prefix("table_"))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("table_{}", max + 1)
}

/// 指定侧的下一个展示桌号：该侧最大桌号 + 1
pub fn next_display_number(tables: &[TableRecord], side: Side) -> u32 {
    tables
        .iter()
        .filter(|t| t.side == side)
        .map(|t| t.display_number)
        .max()
        .unwrap_or(0)
        + 1
}

/// 读取全部桌台，按 (侧, 桌号) 排序
pub async fn list_tables(store: &CsvStore) -> AppResult<Vec<TableRecord>> {
    let mut tables = store.read_tables().await?;
    tables.sort_by_key(|t| (t.side, t.display_number));
    Ok(tables)
}

/// 新增桌台；payload 未带桌号时按所在侧顺延
pub async fn add_table(store: &CsvStore, payload: TableCreate) -> AppResult<TableRecord> {
    let mut tables = store.read_tables().await?;

    let display_number = payload
        .display_number
        .unwrap_or_else(|| next_display_number(&tables, payload.side));
    if display_number == 0 {
        return Err(AppError::validation("display number must be positive"));
    }

    let table = TableRecord {
        table_id: next_table_id(&tables),
        display_number,
        side: payload.side,
        notes: payload.notes,
        timestamp: now_iso(),
    };
    tables.push(table.clone());
    store.write_tables(&tables).await?;
    info!("Added table {} ({:?} side #{})", table.table_id, table.side, display_number);
    Ok(table)
}

/// 删除桌台并级联删除该桌全部宾客记录
pub async fn delete_table(store: &CsvStore, table_id: &str) -> AppResult<()> {
    let tables = store.read_tables().await?;
    let remaining: Vec<TableRecord> = tables
        .iter()
        .filter(|t| t.table_id != table_id)
        .cloned()
        .collect();
    if remaining.len() == tables.len() {
        return Err(AppError::not_found(format!("Table {table_id}")));
    }

    let guests = store.read_guests().await?;
    let kept_guests: Vec<_> = guests
        .iter()
        .filter(|g| g.table_id != table_id)
        .cloned()
        .collect();

    store.write_tables(&remaining).await?;
    store.write_guests(&kept_guests).await?;
    info!(
        "Deleted table {} and {} guest record(s)",
        table_id,
        guests.len() - kept_guests.len()
    );
    Ok(())
}

/// 更新桌台备注 (读-改-写，只动 notes 与时间戳)
pub async fn update_notes(store: &CsvStore, table_id: &str, notes: String) -> AppResult<TableRecord> {
    let mut tables = store.read_tables().await?;
    let table = tables
        .iter_mut()
        .find(|t| t.table_id == table_id)
        .ok_or_else(|| AppError::not_found(format!("Table {table_id}")))?;
    table.notes = notes;
    table.timestamp = now_iso();
    let updated = table.clone();
    store.write_tables(&tables).await?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::placement::save_guest;
    use shared::models::{Gender, GuestInfo, SeatRef};

    fn temp_store() -> (tempfile::TempDir, CsvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        (dir, store)
    }

    fn table(id: &str, display_number: u32, side: Side) -> TableRecord {
        TableRecord {
            table_id: id.into(),
            display_number,
            side,
            notes: String::new(),
            timestamp: String::new(),
        }
    }

    #[test]
    fn table_id_continues_from_max_suffix() {
        let tables = vec![
            table("table_1", 1, Side::Left),
            table("table_7", 2, Side::Left),
            table("table_3", 3, Side::Left),
        ];
        assert_eq!(next_table_id(&tables), "table_8");
        assert_eq!(next_table_id(&[]), "table_1");
    }

    #[test]
    fn display_number_is_per_side() {
        let tables = vec![
            table("table_1", 1, Side::Left),
            table("table_2", 2, Side::Left),
            table("table_3", 3, Side::Left),
            table("table_12", 5, Side::Right),
        ];
        assert_eq!(next_display_number(&tables, Side::Left), 4);
        assert_eq!(next_display_number(&tables, Side::Right), 6);
    }

    #[tokio::test]
    async fn add_table_assigns_id_and_number() {
        let (_dir, store) = temp_store();
        store
            .write_tables(&[table("table_1", 1, Side::Left), table("table_2", 2, Side::Left)])
            .await
            .unwrap();

        let added = add_table(
            &store,
            TableCreate {
                display_number: None,
                side: Side::Left,
                notes: "靠窗".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(added.table_id, "table_3");
        assert_eq!(added.display_number, 3);
        assert_eq!(store.read_tables().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn delete_table_cascades_to_its_guests_only() {
        let (_dir, store) = temp_store();
        store
            .write_tables(&[table("table_1", 1, Side::Left), table("table_2", 2, Side::Left)])
            .await
            .unwrap();
        let info = GuestInfo {
            name: "张三".into(),
            gender: Gender::Male,
            phone: "13800138001".into(),
            notes: String::new(),
            accommodation: false,
            relationship: "other".into(),
        };
        for (table_id, idx) in [("table_1", 0u32), ("table_1", 1), ("table_2", 0)] {
            let seat = SeatRef {
                id: format!("{table_id}_seat_{idx}"),
                table_id: table_id.into(),
                seat_number: idx + 1,
            };
            save_guest(&store, info.clone(), &seat).await.unwrap();
        }

        delete_table(&store, "table_1").await.unwrap();

        let tables = store.read_tables().await.unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].table_id, "table_2");
        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].table_id, "table_2");
    }

    #[tokio::test]
    async fn delete_missing_table_is_not_found() {
        let (_dir, store) = temp_store();
        store.write_tables(&[table("table_1", 1, Side::Left)]).await.unwrap();
        let err = delete_table(&store, "table_9").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn notes_update_touches_only_the_target() {
        let (_dir, store) = temp_store();
        store
            .write_tables(&[table("table_1", 1, Side::Left), table("table_2", 2, Side::Left)])
            .await
            .unwrap();

        let updated = update_notes(&store, "table_2", "长辈桌".into()).await.unwrap();
        assert_eq!(updated.notes, "长辈桌");

        let tables = store.read_tables().await.unwrap();
        assert_eq!(tables[0].notes, "");
        assert_eq!(tables[1].notes, "长辈桌");

        let err = update_notes(&store, "table_9", String::new()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
