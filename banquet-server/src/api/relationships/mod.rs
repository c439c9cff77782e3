//! 关系标签 API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/relationships", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(handler::list));

    // 静态段 /reorder 的优先级高于 /{value}
    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/reorder", axum::routing::put(handler::reorder))
        .route(
            "/{value}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
