//! 宾客 API 模块

mod handler;

use axum::{Router, middleware, routing::{delete, get, post}};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/guests", routes())
}

fn routes() -> Router<ServerState> {
    // 公开路由：非管理员靠电话验证门修改占用座位
    let open_routes = Router::new()
        .route("/", get(handler::list).post(handler::save))
        .route("/verify", post(handler::verify))
        .route("/{seat_id}/{table_id}", delete(handler::delete_guest));

    // 管理员路由：清空、清理、拖拽移动
    let manage_routes = Router::new()
        .route("/", delete(handler::clear))
        .route("/cleanup", post(handler::cleanup))
        .route("/move", post(handler::move_guest))
        .layer(middleware::from_fn(require_admin));

    open_routes.merge(manage_routes)
}
