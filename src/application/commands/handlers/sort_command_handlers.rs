//! Sort Command Handlers

use crate::application::commands::sort_commands::*;
use crate::domain::sort_numbers;

/// Sort Handler - 执行排序
///
/// 无状态：每个请求的输入输出完全自包含，排序本身是纯函数，
/// 因此处理器不持有任何资源，也无失败路径
#[derive(Debug, Clone, Copy, Default)]
pub struct SortNumbersHandler;

impl SortNumbersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SortNumbersCommand) -> SortNumbersResult {
        let count = cmd.numbers.len();
        let sorted = sort_numbers(cmd.numbers);

        tracing::debug!(count, "Numbers sorted");

        SortNumbersResult { sorted }
    }
}
