//! Numsort - 数字排序 HTTP 服务
//!
//! 架构设计: 分层架构 (Domain / Application / Infrastructure)
//!
//! 领域层 (domain/):
//! - Sorting: 纯排序逻辑（无 I/O、无框架依赖）
//!
//! 应用层 (application/):
//! - Commands: 排序命令及处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
