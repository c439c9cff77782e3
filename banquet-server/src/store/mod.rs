//! CSV 存储层 (Record Access Layer)
//!
//! 三个平面 CSV 文件是唯一的数据源：
//!
//! | 文件 | 内容 |
//! |------|------|
//! | guests.csv | 宾客-座位记录 |
//! | tables.csv | 桌台元数据 |
//! | relationships.csv | 关系标签 |
//!
//! 读取返回有序记录；文件不存在时返回空序列。写入是整文件替换，
//! 无追加模式，读-改-写的顺序由调用方负责 (无锁，接受 last-writer-wins)。
//! 行数据损坏 (非数字字段除外) 会作为 [`StoreError`] 原样向上传播。

mod guests;
mod relationships;
mod seed;
mod tables;

pub use seed::initialize;

use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed row in {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to serialize rows for {file}: {source}")]
    Serialize {
        file: String,
        #[source]
        source: csv::Error,
    },
}

/// 存储层 Result
pub type StoreResult<T> = Result<T, StoreError>;

/// CSV 文件存储
///
/// 只持有数据目录路径，可廉价克隆；每次操作都重新打开文件，
/// 不缓存任何内容 (文件即权威状态)。
#[derive(Clone, Debug)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn guests_path(&self) -> PathBuf {
        self.data_dir.join("guests.csv")
    }

    pub fn tables_path(&self) -> PathBuf {
        self.data_dir.join("tables.csv")
    }

    pub fn relationships_path(&self) -> PathBuf {
        self.data_dir.join("relationships.csv")
    }
}

/// 读取并反序列化整个文件。
///
/// - 文件不存在 → 空序列
/// - 表头统一转小写后再映射字段
/// - `skip_blank_field` 指定的列为空的行按占位符丢弃 (数据卫生规则)
/// - 其余行数据损坏 → [`StoreError::Malformed`]
async fn read_rows<T: DeserializeOwned>(
    path: &Path,
    skip_blank_field: Option<&str>,
) -> StoreResult<Vec<T>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let file = path.display().to_string();
    let malformed = |source: csv::Error| StoreError::Malformed {
        file: file.clone(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes.as_slice());

    let headers: StringRecord = rdr
        .headers()
        .map_err(malformed)?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();
    let blank_idx = skip_blank_field.and_then(|field| headers.iter().position(|h| h == field));

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(malformed)?;
        if let Some(idx) = blank_idx
            && record.get(idx).map(str::trim).unwrap_or("").is_empty()
        {
            continue;
        }
        rows.push(record.deserialize(Some(&headers)).map_err(malformed)?);
    }
    Ok(rows)
}

/// 序列化并整文件替换。表头行总是写出，即使记录为空。
async fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> StoreResult<()> {
    let file = path.display().to_string();
    let serialize_err = |source: csv::Error| StoreError::Serialize {
        file: file.clone(),
        source,
    };

    let mut buf = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        wtr.write_record(headers).map_err(serialize_err)?;
        for row in rows {
            wtr.serialize(row).map_err(serialize_err)?;
        }
        wtr.flush()?;
    }
    tokio::fs::write(path, buf).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Gender, GuestRecord, RelationshipCategory, Side};

    fn temp_store() -> (tempfile::TempDir, CsvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        (dir, store)
    }

    fn guest(name: &str, table_id: &str, seat_idx: u32) -> GuestRecord {
        GuestRecord {
            name: name.into(),
            gender: Gender::Male,
            phone: "13800138001".into(),
            notes: "大学同学".into(),
            accommodation: true,
            relationship: "groom_classmate".into(),
            table_id: table_id.into(),
            seat_id: format!("{table_id}_seat_{seat_idx}"),
            seat_number: seat_idx + 1,
            timestamp: "2026-01-01T00:00:00.000Z".into(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.read_guests().await.unwrap().is_empty());
        assert!(store.read_tables().await.unwrap().is_empty());
        assert!(store.read_relationships().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn guests_round_trip() {
        let (_dir, store) = temp_store();
        let guests = vec![guest("张三", "table_1", 0), guest("李四", "table_1", 1)];
        store.write_guests(&guests).await.unwrap();
        let read_back = store.read_guests().await.unwrap();
        assert_eq!(read_back, guests);

        // write(read()) is a no-op on content
        store.write_guests(&read_back).await.unwrap();
        assert_eq!(store.read_guests().await.unwrap(), read_back);
    }

    #[tokio::test]
    async fn blank_name_rows_are_dropped() {
        let (_dir, store) = temp_store();
        let csv = "name,gender,phone,notes,accommodation,relationship,tableid,seatid,seatnumber,timestamp\n\
                   张三,male,13800138001,,Yes,other,table_1,table_1_seat_0,1,\n\
                   ,female,13800138002,,No,other,table_1,table_1_seat_1,2,\n";
        tokio::fs::write(store.guests_path(), csv).await.unwrap();
        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "张三");
    }

    #[tokio::test]
    async fn blank_names_filtered_on_write() {
        let (_dir, store) = temp_store();
        let mut rows = vec![guest("张三", "table_1", 0)];
        rows.push(GuestRecord {
            name: "   ".into(),
            ..guest("x", "table_1", 1)
        });
        store.write_guests(&rows).await.unwrap();
        assert_eq!(store.read_guests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn accommodation_persists_as_yes_no() {
        let (_dir, store) = temp_store();
        store.write_guests(&[guest("张三", "table_1", 0)]).await.unwrap();
        let raw = tokio::fs::read_to_string(store.guests_path()).await.unwrap();
        assert!(raw.contains(",Yes,"));
        assert!(store.read_guests().await.unwrap()[0].accommodation);
    }

    #[tokio::test]
    async fn uppercase_headers_are_accepted() {
        let (_dir, store) = temp_store();
        let csv = "Name,Gender,Phone,Notes,Accommodation,Relationship,TableId,SeatId,SeatNumber,Timestamp\n\
                   张三,male,13800138001,,Yes,other,table_1,table_1_seat_0,1,\n";
        tokio::fs::write(store.guests_path(), csv).await.unwrap();
        let guests = store.read_guests().await.unwrap();
        assert_eq!(guests[0].table_id, "table_1");
    }

    #[tokio::test]
    async fn malformed_gender_is_a_read_error() {
        let (_dir, store) = temp_store();
        let csv = "name,gender,phone,notes,accommodation,relationship,tableid,seatid,seatnumber,timestamp\n\
                   张三,alien,13800138001,,Yes,other,table_1,table_1_seat_0,1,\n";
        tokio::fs::write(store.guests_path(), csv).await.unwrap();
        assert!(matches!(
            store.read_guests().await,
            Err(StoreError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn malformed_seat_number_falls_back_to_zero() {
        let (_dir, store) = temp_store();
        let csv = "name,gender,phone,notes,accommodation,relationship,tableid,seatid,seatnumber,timestamp\n\
                   张三,male,13800138001,,Yes,other,table_1,table_1_seat_0,abc,\n";
        tokio::fs::write(store.guests_path(), csv).await.unwrap();
        assert_eq!(store.read_guests().await.unwrap()[0].seat_number, 0);
    }

    #[tokio::test]
    async fn empty_write_keeps_header_row() {
        let (_dir, store) = temp_store();
        store.write_guests(&[]).await.unwrap();
        let raw = tokio::fs::read_to_string(store.guests_path()).await.unwrap();
        assert!(raw.starts_with("name,gender,phone"));
        assert!(store.read_guests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn relationships_read_sorted_by_order() {
        let (_dir, store) = temp_store();
        let csv = "value,label,category,order,timestamp\n\
                   b,标签B,other,2,\n\
                   c,标签C,other,3,\n\
                   a,标签A,other,1,\n";
        tokio::fs::write(store.relationships_path(), csv).await.unwrap();
        let tags = store.read_relationships().await.unwrap();
        let values: Vec<&str> = tags.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert_eq!(tags[0].category, RelationshipCategory::Other);
    }

    #[tokio::test]
    async fn tables_round_trip_with_side_enum() {
        let (_dir, store) = temp_store();
        let tables = vec![
            shared::models::TableRecord {
                table_id: "table_1".into(),
                display_number: 1,
                side: Side::Left,
                notes: String::new(),
                timestamp: "2026-01-01T00:00:00.000Z".into(),
            },
            shared::models::TableRecord {
                table_id: "table_12".into(),
                display_number: 1,
                side: Side::Right,
                notes: "主桌".into(),
                timestamp: "2026-01-01T00:00:00.000Z".into(),
            },
        ];
        store.write_tables(&tables).await.unwrap();
        assert_eq!(store.read_tables().await.unwrap(), tables);
    }

    #[tokio::test]
    async fn blank_timestamps_filled_on_write() {
        let (_dir, store) = temp_store();
        let mut g = guest("张三", "table_1", 0);
        g.timestamp = String::new();
        store.write_guests(&[g]).await.unwrap();
        let read_back = store.read_guests().await.unwrap();
        assert!(!read_back[0].timestamp.is_empty());
    }
}
