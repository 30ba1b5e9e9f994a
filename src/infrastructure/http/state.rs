//! Application State
//!
//! 服务无跨请求共享的可变状态，AppState 只承载无状态的命令处理器

use crate::application::SortNumbersHandler;

/// 应用状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub sort_handler: SortNumbersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new() -> Self {
        Self {
            sort_handler: SortNumbersHandler::new(),
        }
    }
}
