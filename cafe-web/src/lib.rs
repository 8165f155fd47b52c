//! Cafe Web - 咖啡馆订座前端
//!
//! # 架构概述
//!
//! 浏览器只和本服务交互；本服务持有 cookie 会话，执行路由守卫和表单校验，
//! 再通过 [`cafe_client`] 调用远端预订服务。
//!
//! # 模块结构
//!
//! ```text
//! cafe-web/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # cookie 会话、路由守卫、提取器
//! ├── api/           # 页面路由和处理器
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由组装 + tower-http 中间件
//! └── utils/         # 页面错误、日志初始化
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use auth::{AdminSession, Session};
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{PageError, PageResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   ______       ____
  / ____/___ _ / __/__
 / /   / __ `// /_/ _ \
/ /___/ /_/ // __/  __/
\____/\__,_//_/  \___/
    "#
    );
}
