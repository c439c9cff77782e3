//! 数据文件初始化
//!
//! 首次启动时生成桌台与关系标签文件；开发环境下为空的宾客文件
//! 注入演示数据，生产环境只建表头。

use shared::models::{
    Gender, GuestRecord, RelationshipCategory, RelationshipRecord, Side, TableRecord,
};
use tracing::info;

use super::{CsvStore, StoreResult};
use crate::core::Config;
use crate::utils::time::now_iso;

/// 确保数据目录与三个 CSV 文件就绪
pub async fn initialize(store: &CsvStore, config: &Config) -> StoreResult<()> {
    tokio::fs::create_dir_all(store.data_dir()).await?;

    if !store.tables_path().exists() {
        store.write_tables(&default_tables(config)).await?;
        info!("Initialized tables CSV file: {}", store.tables_path().display());
    }

    if !store.relationships_path().exists() {
        store.write_relationships(&default_relationships()).await?;
        info!(
            "Initialized relationships CSV file: {}",
            store.relationships_path().display()
        );
    }

    if config.is_development() {
        let needs_demo_data =
            !store.guests_path().exists() || store.read_guests().await?.is_empty();
        if needs_demo_data {
            store.write_guests(&demo_guests()).await?;
            info!(
                "Initialized guests CSV file with demo data: {}",
                store.guests_path().display()
            );
        }
    } else if !store.guests_path().exists() {
        store.write_guests(&[]).await?;
        info!("Initialized empty guests CSV file: {}", store.guests_path().display());
    }

    Ok(())
}

/// 按配置生成默认桌台：前 `tables_per_side` 张在左侧，其余在右侧，
/// 每侧桌号从 1 重新计数
fn default_tables(config: &Config) -> Vec<TableRecord> {
    (1..=config.total_tables)
        .map(|i| {
            let (side, display_number) = if i <= config.tables_per_side {
                (Side::Left, i)
            } else {
                (Side::Right, i - config.tables_per_side)
            };
            TableRecord {
                table_id: format!("table_{i}"),
                display_number,
                side,
                notes: String::new(),
                timestamp: now_iso(),
            }
        })
        .collect()
}

/// 默认关系标签
fn default_relationships() -> Vec<RelationshipRecord> {
    use RelationshipCategory::*;
    let defaults: [(&str, &str, RelationshipCategory); 9] = [
        ("groom_classmate", "男方同学/同事", Groom),
        ("bride_classmate", "女方同学/同事", Bride),
        ("groom_father_friends", "男方爸爸亲友", GroomFamily),
        ("groom_mother_friends", "男方妈妈亲友", GroomFamily),
        ("bride_father_friends", "女方爸爸亲友", BrideFamily),
        ("bride_mother_friends", "女方妈妈亲友", BrideFamily),
        ("groom_father_colleagues", "男方爸爸同事", GroomFamily),
        ("bride_father_colleagues", "女方爸爸同事", BrideFamily),
        ("other", "其他", Other),
    ];

    defaults
        .into_iter()
        .enumerate()
        .map(|(idx, (value, label, category))| RelationshipRecord {
            value: value.into(),
            label: label.into(),
            category,
            order: idx as u32 + 1,
            timestamp: now_iso(),
        })
        .collect()
}

/// 开发环境演示数据：第一桌坐满 12 位宾客
fn demo_guests() -> Vec<GuestRecord> {
    use Gender::*;
    let demo: [(&str, Gender, &str, &str, bool, &str); 12] = [
        ("张三", Male, "13800138001", "大学同学", true, "groom_classmate"),
        ("李四", Female, "13800138002", "工作同事", false, "bride_classmate"),
        ("王五", Male, "13800138003", "好朋友", true, "groom_classmate"),
        ("赵六", Female, "13800138004", "大学同学", false, "bride_classmate"),
        ("孙七", Male, "13800138005", "表哥", true, "groom_father_friends"),
        ("周八", Female, "13800138006", "同事", false, "bride_classmate"),
        ("吴九", Male, "13800138007", "室友", true, "groom_classmate"),
        ("郑十", Female, "13800138008", "堂妹", false, "bride_mother_friends"),
        ("刘一", Male, "13800138009", "高中同学", true, "groom_classmate"),
        ("陈二", Female, "13800138010", "部门同事", false, "bride_classmate"),
        ("杨三", Male, "13800138011", "父亲同事", true, "groom_father_colleagues"),
        ("黄四", Female, "13800138012", "父亲朋友", false, "bride_father_friends"),
    ];

    demo.into_iter()
        .enumerate()
        .map(
            |(idx, (name, gender, phone, notes, accommodation, relationship))| GuestRecord {
                name: name.into(),
                gender,
                phone: phone.into(),
                notes: notes.into(),
                accommodation,
                relationship: relationship.into(),
                table_id: "table_1".into(),
                seat_id: format!("table_1_seat_{idx}"),
                seat_number: idx as u32 + 1,
                timestamp: now_iso(),
            },
        )
        .collect()
}
