//! Sort Commands - 排序相关命令

use serde_json::Value;

/// 排序命令 - 对一组数字按非递减顺序排序
///
/// 元素以原始 JSON 值传入：端点只校验顶层数组形状，
/// 元素级数值校验由客户端负责
#[derive(Debug, Clone)]
pub struct SortNumbersCommand {
    pub numbers: Vec<Value>,
}

/// 排序响应
#[derive(Debug, Clone)]
pub struct SortNumbersResult {
    pub sorted: Vec<Value>,
}
