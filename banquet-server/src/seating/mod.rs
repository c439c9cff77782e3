//! 座位域逻辑
//!
//! # 结构
//!
//! - [`layout`] - 座位对账：服务端行数据 ⇄ 桌台/座位视图合并
//! - [`placement`] - 宾客落座协议：登记、删除、移动、验证门
//! - [`venue`] - 桌台管理：新增、删除 (级联)、备注
//! - [`taxonomy`] - 关系标签管理：增删改与重排序
//!
//! 所有修改操作都是 读全量 → 内存变换 → 写全量 的序列，
//! 文件内容是唯一权威状态，修改后调用方必须重新拉取并对账。

pub mod layout;
pub mod placement;
pub mod taxonomy;
pub mod venue;

pub use layout::{build_layout, mask_layout, seat_id};
