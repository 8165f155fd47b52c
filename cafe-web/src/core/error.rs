use cafe_client::ClientError;
use thiserror::Error;

/// 服务启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("预订服务客户端初始化失败: {0}")]
    Client(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
