//! Domain Layer - 领域层
//!
//! 包含核心排序逻辑，无 I/O、无框架依赖

mod sorting;

pub use sorting::sort_numbers;
