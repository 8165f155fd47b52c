//! 核心模块 - 配置、状态和服务器
//!
//! - [`Config`] - 环境变量配置
//! - [`ServerState`] - 共享只读状态
//! - [`Server`] - HTTP 服务器
//! - [`ServerError`] - 启动错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
