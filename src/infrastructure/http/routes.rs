//! HTTP Routes
//!
//! API Endpoints:
//! - /sort-numbers  POST  对一组数字排序
//! - /ping          GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sort-numbers", post(handlers::sort_numbers))
        .route("/ping", get(handlers::ping))
}
