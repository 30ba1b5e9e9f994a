//! 应用层 - 用例编排
//!
//! 包含：
//! - commands: 排序命令及处理器

pub mod commands;

// Re-exports
pub use commands::{handlers::SortNumbersHandler, SortNumbersCommand, SortNumbersResult};
