//! 关系标签管理
//!
//! `value` 是全局唯一键，创建后不可变；`order` 只作展示排序，
//! 重排序时整体重写为 1..N。删除标签不级联宾客记录，
//! 引用悬空的宾客照常保留。

use shared::models::{RelationshipCreate, RelationshipRecord, RelationshipUpdate};
use tracing::info;

use crate::store::CsvStore;
use crate::utils::time::now_iso;
use crate::utils::validation::{MAX_NAME_LEN, MAX_VALUE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// 新增标签：value 查重，order 取现有最大值 + 1
pub async fn add_relationship(
    store: &CsvStore,
    payload: RelationshipCreate,
) -> AppResult<RelationshipRecord> {
    validate_required_text(&payload.value, "value", MAX_VALUE_LEN)?;
    validate_required_text(&payload.label, "label", MAX_NAME_LEN)?;

    let mut tags = store.read_relationships().await?;
    if tags.iter().any(|t| t.value == payload.value) {
        return Err(AppError::conflict(format!(
            "Relationship value {} already exists",
            payload.value
        )));
    }

    let max_order = tags.iter().map(|t| t.order).max().unwrap_or(0);
    let tag = RelationshipRecord {
        value: payload.value,
        label: payload.label,
        category: payload.category,
        order: max_order + 1,
        timestamp: now_iso(),
    };
    tags.push(tag.clone());
    store.write_relationships(&tags).await?;
    info!("Added relationship tag {}", tag.value);
    Ok(tag)
}

/// 更新标签的 label/category/order；value 不可变
pub async fn update_relationship(
    store: &CsvStore,
    value: &str,
    payload: RelationshipUpdate,
) -> AppResult<RelationshipRecord> {
    let mut tags = store.read_relationships().await?;
    let tag = tags
        .iter_mut()
        .find(|t| t.value == value)
        .ok_or_else(|| AppError::not_found(format!("Relationship {value}")))?;

    if let Some(label) = payload.label {
        validate_required_text(&label, "label", MAX_NAME_LEN)?;
        tag.label = label;
    }
    if let Some(category) = payload.category {
        tag.category = category;
    }
    if let Some(order) = payload.order {
        tag.order = order;
    }
    tag.timestamp = now_iso();
    let updated = tag.clone();
    store.write_relationships(&tags).await?;
    Ok(updated)
}

/// 删除标签；宾客记录里的引用保持原样
pub async fn delete_relationship(store: &CsvStore, value: &str) -> AppResult<()> {
    let tags = store.read_relationships().await?;
    let remaining: Vec<RelationshipRecord> =
        tags.iter().filter(|t| t.value != value).cloned().collect();
    if remaining.len() == tags.len() {
        return Err(AppError::not_found(format!("Relationship {value}")));
    }
    store.write_relationships(&remaining).await?;
    info!("Deleted relationship tag {value}");
    Ok(())
}

/// 重排序：提交的完整序列整体替换文件，order 重写为 1-based 位置
pub async fn reorder_relationships(
    store: &CsvStore,
    sequence: Vec<RelationshipRecord>,
) -> AppResult<Vec<RelationshipRecord>> {
    let reordered: Vec<RelationshipRecord> = sequence
        .into_iter()
        .enumerate()
        .map(|(idx, mut tag)| {
            tag.order = idx as u32 + 1;
            tag.timestamp = now_iso();
            tag
        })
        .collect();
    store.write_relationships(&reordered).await?;
    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RelationshipCategory;

    fn temp_store() -> (tempfile::TempDir, CsvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        (dir, store)
    }

    fn create(value: &str, label: &str) -> RelationshipCreate {
        RelationshipCreate {
            value: value.into(),
            label: label.into(),
            category: RelationshipCategory::Other,
        }
    }

    #[tokio::test]
    async fn add_assigns_next_order() {
        let (_dir, store) = temp_store();
        let a = add_relationship(&store, create("a", "甲")).await.unwrap();
        let b = add_relationship(&store, create("b", "乙")).await.unwrap();
        assert_eq!(a.order, 1);
        assert_eq!(b.order, 2);
    }

    #[tokio::test]
    async fn duplicate_value_is_a_conflict() {
        let (_dir, store) = temp_store();
        add_relationship(&store, create("a", "甲")).await.unwrap();
        let err = add_relationship(&store, create("a", "又一个甲")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.read_relationships().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_patches_without_touching_value() {
        let (_dir, store) = temp_store();
        add_relationship(&store, create("a", "甲")).await.unwrap();
        let updated = update_relationship(
            &store,
            "a",
            RelationshipUpdate {
                label: Some("新甲".into()),
                category: Some(RelationshipCategory::Groom),
                order: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.value, "a");
        assert_eq!(updated.label, "新甲");
        assert_eq!(updated.category, RelationshipCategory::Groom);
        assert_eq!(updated.order, 1);
    }

    #[tokio::test]
    async fn reorder_rewrites_orders_by_position() {
        let (_dir, store) = temp_store();
        let a = add_relationship(&store, create("a", "甲")).await.unwrap();
        let b = add_relationship(&store, create("b", "乙")).await.unwrap();
        let c = add_relationship(&store, create("c", "丙")).await.unwrap();

        // 提交顺序 [c, a, b] → c=1, a=2, b=3
        reorder_relationships(&store, vec![c, a, b]).await.unwrap();
        let tags = store.read_relationships().await.unwrap();
        let pairs: Vec<(&str, u32)> = tags.iter().map(|t| (t.value.as_str(), t.order)).collect();
        assert_eq!(pairs, [("c", 1), ("a", 2), ("b", 3)]);
    }

    #[tokio::test]
    async fn delete_is_404_when_absent() {
        let (_dir, store) = temp_store();
        add_relationship(&store, create("a", "甲")).await.unwrap();
        delete_relationship(&store, "a").await.unwrap();
        let err = delete_relationship(&store, "a").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
