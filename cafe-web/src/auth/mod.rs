//! 认证模块
//!
//! 前端自身不签发令牌，只保存预订服务返回的 token：
//! - [`Session`] - 当前会话 (cookie 中的 token + user)
//! - [`route_guard`] - 路由守卫中间件
//! - [`AdminSession`] - 要求管理员的提取器

pub mod extractor;
pub mod guard;
pub mod session;

pub use extractor::AdminSession;
pub use guard::{GuardDecision, decide, route_guard};
pub use session::{
    CookieOptions, Session, SessionCookies, clear_session_cookies, set_session_cookies,
};
