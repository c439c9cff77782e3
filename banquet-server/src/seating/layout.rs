//! 座位对账 (Reconciliation)
//!
//! 把持久化的宾客行与桌台元数据合并成可渲染的桌台/座位视图。
//! 座位本身不落盘：每张桌合成 `default_seats` 个座位，当有宾客的
//! 座位号超出默认容量时按需扩展，保证每条宾客记录都能落到真实座位。

use shared::models::{GuestRecord, Seat, SeatGuest, TableLayout, TableRecord};
use shared::util::{mask_name, mask_phone};

/// 合成座位 id：`<tableid>_seat_<index>`，index 从 0 开始
pub fn seat_id(table_id: &str, index: u32) -> String {
    format!("{table_id}_seat_{index}")
}

/// 对账：生成按 (侧, 桌号) 排序的完整桌台视图
///
/// 引用不存在桌台的宾客行不报错，仅从视图中排除。
pub fn build_layout(
    tables: &[TableRecord],
    guests: &[GuestRecord],
    default_seats: u32,
) -> Vec<TableLayout> {
    let mut sorted: Vec<&TableRecord> = tables.iter().collect();
    sorted.sort_by_key(|t| (t.side, t.display_number));
    sorted
        .into_iter()
        .map(|table| build_table(table, guests, default_seats))
        .collect()
}

fn build_table(table: &TableRecord, guests: &[GuestRecord], default_seats: u32) -> TableLayout {
    let table_guests: Vec<&GuestRecord> = guests
        .iter()
        .filter(|g| g.table_id == table.table_id)
        .collect();

    let max_seat_number = table_guests.iter().map(|g| g.seat_number).max().unwrap_or(0);
    let seat_count = default_seats.max(max_seat_number);

    let seats: Vec<Seat> = (0..seat_count)
        .map(|index| {
            let id = seat_id(&table.table_id, index);
            // 每个座位至多一条记录；重复时取文件中的第一条
            let guest = table_guests
                .iter()
                .find(|g| g.seat_id == id)
                .map(|g| SeatGuest::from(g.info()));
            Seat {
                occupied: guest.is_some(),
                id,
                table_id: table.table_id.clone(),
                seat_number: index + 1,
                guest,
            }
        })
        .collect();

    let current_count = seats.iter().filter(|s| s.occupied).count() as u32;

    TableLayout {
        id: table.table_id.clone(),
        display_number: table.display_number,
        side: table.side,
        max_capacity: default_seats,
        extended_capacity: default_seats.max(max_seat_number),
        current_count,
        notes: table.notes.clone(),
        seats,
    }
}

/// 为非管理员视图脱敏：姓名打码，电话隐藏验证码窗口 (第 4-7 位)
pub fn mask_layout(layout: &mut [TableLayout]) {
    for table in layout {
        for seat in &mut table.seats {
            if let Some(guest) = &mut seat.guest {
                guest.name = mask_name(&guest.name);
                guest.phone = mask_phone(&guest.phone);
            }
        }
    }
}
