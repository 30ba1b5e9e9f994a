//! 数字排序
//!
//! 对 JSON 数组元素按数值大小进行非递减排序。
//! 输出始终是输入的一个排列：不增加、不丢弃、不重复任何元素。

use std::cmp::Ordering;

use serde_json::Value;

/// 按数值大小比较两个 JSON 元素
///
/// 排序规则：
/// 1. 数值元素按其 f64 值比较
/// 2. 非数值元素彼此视为相等，且排在所有数值之后
#[inline]
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 冒泡排序
///
/// 对输入序列做相邻元素两两比较，逆序则交换，直到整体满足非递减顺序。
/// 输入规模为几十个元素，O(n²) 足够。
pub fn sort_numbers(mut values: Vec<Value>) -> Vec<Value> {
    let n = values.len();
    if n < 2 {
        return values;
    }

    for x in 0..n - 1 {
        for y in 0..n - 1 - x {
            if compare_values(&values[y], &values[y + 1]) == Ordering::Greater {
                values.swap(y, y + 1);
            }
        }
    }

    values
}
