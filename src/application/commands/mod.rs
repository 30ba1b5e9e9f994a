//! 应用层 - 命令
//!
//! 本服务只有一个用例：对一组数字排序

mod sort_commands;

pub mod handlers;

pub use sort_commands::*;
