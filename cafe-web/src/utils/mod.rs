//! 工具模块
//!
//! - [`PageError`] - 页面错误 (映射为响应或跳转)
//! - 日志初始化

pub mod error;
pub mod logger;

pub use error::{PageError, client_err};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

/// 页面处理器的 Result 类型
pub type PageResult<T> = Result<T, PageError>;
