//! 宾客落座协议
//!
//! 每个操作都是 读全量 → 过滤/变换 → 写全量；(tableid, seatid) 的
//! 唯一性由"先过滤后追加"保证，不依赖任何数据库约束。

use shared::models::{GuestInfo, GuestRecord, SeatRef};
use tracing::info;

use crate::store::CsvStore;
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppResult};

/// 登记或更新宾客：替换 (seat.tableId, seat.id) 上的现有记录
///
/// 对同一座位重复提交等效于覆盖，净效果幂等。
pub async fn save_guest(store: &CsvStore, guest: GuestInfo, seat: &SeatRef) -> AppResult<GuestRecord> {
    let mut guests = store.read_guests().await?;
    guests.retain(|g| !(g.seat_id == seat.id && g.table_id == seat.table_id));

    let record = GuestRecord {
        name: guest.name,
        gender: guest.gender,
        phone: guest.phone,
        notes: guest.notes,
        accommodation: guest.accommodation,
        relationship: guest.relationship,
        table_id: seat.table_id.clone(),
        seat_id: seat.id.clone(),
        seat_number: seat.seat_number,
        timestamp: now_iso(),
    };
    guests.push(record.clone());
    store.write_guests(&guests).await?;
    Ok(record)
}

/// 删除座位上的宾客；座位本就为空时也算成功
pub async fn delete_guest(store: &CsvStore, seat_id: &str, table_id: &str) -> AppResult<()> {
    let mut guests = store.read_guests().await?;
    guests.retain(|g| !(g.seat_id == seat_id && g.table_id == table_id));
    store.write_guests(&guests).await?;
    Ok(())
}

/// 移动宾客 (拖拽，仅管理员)
///
/// 目标座位必须为空且不同于源座位。合法移动先写目标座位、再删源
/// 座位：两步之间失败时宾客会同时出现在两个座位，而不是丢失；
/// 调用方随后必须重新全量拉取并对账，不信任任何增量状态。
pub async fn move_guest(store: &CsvStore, from: &SeatRef, to: &SeatRef) -> AppResult<GuestRecord> {
    if from.same_seat(to) {
        return Err(AppError::validation("target seat is the same as the source seat"));
    }

    let guests = store.read_guests().await?;
    let source = guests
        .iter()
        .find(|g| g.seat_id == from.id && g.table_id == from.table_id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Guest at seat {}", from.id)))?;
    if guests
        .iter()
        .any(|g| g.seat_id == to.id && g.table_id == to.table_id)
    {
        return Err(AppError::conflict(format!("Target seat {} is occupied", to.id)));
    }

    let moved = save_guest(store, source.info(), to).await?;
    delete_guest(store, &from.id, &from.table_id).await?;
    info!("Moved guest \"{}\" from {} to {}", moved.name, from.id, to.id);
    Ok(moved)
}

/// 清空全部宾客记录 (仅管理员)
pub async fn clear_guests(store: &CsvStore) -> AppResult<()> {
    store.write_guests(&[]).await?;
    Ok(())
}

/// 清理结果
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupSummary {
    pub removed: usize,
    pub remaining: usize,
}

/// 清理宾客文件 (仅管理员)
///
/// 读取本身已丢弃空白姓名占位行；此外折叠同一 (tableid, seatid) 上的
/// 重复记录，保留时间戳最新的一条。跨座位的重复宾客 (移动半途失败的
/// 结果) 不在此处理，保持可见，由管理员人工处置。
pub async fn cleanup(store: &CsvStore) -> AppResult<CleanupSummary> {
    let raw_line_count = raw_data_rows(store).await?;
    let guests = store.read_guests().await?;

    let mut kept: Vec<GuestRecord> = Vec::with_capacity(guests.len());
    for guest in guests {
        match kept
            .iter()
            .position(|g| g.seat_id == guest.seat_id && g.table_id == guest.table_id)
        {
            // RFC3339 字符串按字典序即按时间序
            Some(idx) if guest.timestamp > kept[idx].timestamp => kept[idx] = guest,
            Some(_) => {}
            None => kept.push(guest),
        }
    }

    store.write_guests(&kept).await?;
    Ok(CleanupSummary {
        removed: raw_line_count.saturating_sub(kept.len()),
        remaining: kept.len(),
    })
}

/// 数据行计数 (含占位行)，用于汇报清理掉了多少行
async fn raw_data_rows(store: &CsvStore) -> AppResult<usize> {
    let bytes = match tokio::fs::read(store.guests_path()).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(AppError::store(e.to_string())),
    };
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes.as_slice());
    Ok(rdr.records().count())
}

// ── 验证门 ──────────────────────────────────────────────────────────

/// 占用座位的验证码：电话号码第 4-7 位
pub fn verification_code(phone: &str) -> Option<&str> {
    phone.get(3..7)
}

/// 非管理员修改/删除占用座位前的身份验证
///
/// 座位为空时直接放行；占用时要求提交的验证码与在座宾客电话的
/// 中间四位完全一致。电话不足 7 位无法验证，按验证失败处理。
pub async fn check_seat_access(
    store: &CsvStore,
    seat_id: &str,
    table_id: &str,
    code: Option<&str>,
) -> AppResult<()> {
    let guests = store.read_guests().await?;
    let Some(occupant) = guests
        .iter()
        .find(|g| g.seat_id == seat_id && g.table_id == table_id)
    else {
        return Ok(());
    };

    let Some(expected) = verification_code(&occupant.phone) else {
        return Err(AppError::validation(
            "occupant phone number is incomplete, verification unavailable",
        ));
    };
    match code {
        Some(submitted) if submitted == expected => Ok(()),
        _ => Err(AppError::forbidden("phone verification failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::seat_id;
    use shared::models::Gender;

    fn temp_store() -> (tempfile::TempDir, CsvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        (dir, store)
    }

    fn seat(table_id: &str, idx: u32) -> SeatRef {
        SeatRef {
            id: seat_id(table_id, idx),
            table_id: table_id.into(),
            seat_number: idx + 1,
        }
    }

    fn info(name: &str, phone: &str) -> GuestInfo {
        GuestInfo {
            name: name.into(),
            gender: Gender::Female,
            phone: phone.into(),
            notes: "notes".into(),
            accommodation: true,
            relationship: "other".into(),
        }
    }

    #[tokio::test]
    async fn save_replaces_existing_occupant() {
        let (_dir, store) = temp_store();
        let target = seat("table_1", 0);
        save_guest(&store, info("张三", "13800138001"), &target).await.unwrap();
        save_guest(&store, info("李四", "13800138002"), &target).await.unwrap();

        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "李四");
        assert_eq!(guests[0].seat_number, 1);
    }

    #[tokio::test]
    async fn delete_missing_guest_is_a_noop_success() {
        let (_dir, store) = temp_store();
        save_guest(&store, info("张三", "13800138001"), &seat("table_1", 0))
            .await
            .unwrap();
        delete_guest(&store, "table_1_seat_5", "table_1").await.unwrap();
        assert_eq!(store.read_guests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn move_to_empty_seat_transfers_all_fields() {
        let (_dir, store) = temp_store();
        let from = seat("table_1", 0);
        let to = seat("table_2", 4);
        save_guest(&store, info("张三", "13800138001"), &from).await.unwrap();

        let moved = move_guest(&store, &from, &to).await.unwrap();
        assert_eq!(moved.table_id, "table_2");
        assert_eq!(moved.seat_id, "table_2_seat_4");
        assert_eq!(moved.seat_number, 5);

        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests.len(), 1);
        let g = &guests[0];
        assert_eq!(g.name, "张三");
        assert_eq!(g.phone, "13800138001");
        assert_eq!(g.notes, "notes");
        assert!(g.accommodation);
        assert_eq!(g.relationship, "other");
        assert_eq!(g.seat_id, "table_2_seat_4");
    }

    #[tokio::test]
    async fn move_to_occupied_seat_is_rejected_without_changes() {
        let (_dir, store) = temp_store();
        let from = seat("table_1", 0);
        let to = seat("table_1", 1);
        save_guest(&store, info("张三", "13800138001"), &from).await.unwrap();
        save_guest(&store, info("李四", "13800138002"), &to).await.unwrap();
        let before = store.read_guests().await.unwrap();

        let err = move_guest(&store, &from, &to).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.read_guests().await.unwrap(), before);
    }

    #[tokio::test]
    async fn move_to_same_seat_is_rejected() {
        let (_dir, store) = temp_store();
        let from = seat("table_1", 0);
        save_guest(&store, info("张三", "13800138001"), &from).await.unwrap();
        let err = move_guest(&store, &from, &from.clone()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn move_from_empty_seat_is_not_found() {
        let (_dir, store) = temp_store();
        let err = move_guest(&store, &seat("table_1", 0), &seat("table_1", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn verification_accepts_middle_four_digits_only() {
        let (_dir, store) = temp_store();
        let target = seat("table_1", 0);
        save_guest(&store, info("张三", "13800138001"), &target).await.unwrap();

        // 13800138001 → 第 4-7 位是 0013
        assert!(
            check_seat_access(&store, &target.id, &target.table_id, Some("0013"))
                .await
                .is_ok()
        );
        let err = check_seat_access(&store, &target.id, &target.table_id, Some("9999"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        // 验证失败不改动数据
        assert_eq!(store.read_guests().await.unwrap().len(), 1);

        let err = check_seat_access(&store, &target.id, &target.table_id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn verification_passes_for_empty_seat() {
        let (_dir, store) = temp_store();
        assert!(
            check_seat_access(&store, "table_1_seat_0", "table_1", None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn cleanup_collapses_same_seat_duplicates_keeping_latest() {
        let (_dir, store) = temp_store();
        let mut older = GuestRecord {
            name: "张三".into(),
            gender: Gender::Male,
            phone: "13800138001".into(),
            notes: String::new(),
            accommodation: false,
            relationship: "other".into(),
            table_id: "table_1".into(),
            seat_id: "table_1_seat_0".into(),
            seat_number: 1,
            timestamp: "2026-01-01T00:00:00.000Z".into(),
        };
        older.notes = "old".into();
        let mut newer = older.clone();
        newer.name = "李四".into();
        newer.timestamp = "2026-02-01T00:00:00.000Z".into();
        // 同一座位两条记录：正常写入路径不会产生，但移动半途失败或
        // 手工编辑文件后可能出现
        store.write_guests(&[older, newer]).await.unwrap();

        let summary = cleanup(&store).await.unwrap();
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.remaining, 1);
        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests[0].name, "李四");
    }

    #[tokio::test]
    async fn clear_empties_the_file() {
        let (_dir, store) = temp_store();
        save_guest(&store, info("张三", "13800138001"), &seat("table_1", 0))
            .await
            .unwrap();
        clear_guests(&store).await.unwrap();
        assert!(store.read_guests().await.unwrap().is_empty());
    }
}
