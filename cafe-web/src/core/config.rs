use std::time::Duration;

use cafe_client::{ClientConfig, DEFAULT_BASE_URL};

/// 前端服务配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | BOOKING_API_URL | http://localhost:5000/api | 预订服务地址 |
/// | REQUEST_TIMEOUT_MS | 30000 | 调用预订服务的超时(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录 |
/// | SESSION_TTL_HOURS | 24 | 会话 cookie 有效期(小时) |
///
/// # 示例
///
/// ```ignore
/// BOOKING_API_URL=http://api.cafe.local/api HTTP_PORT=8080 cargo run -p cafe-web
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 预订服务 base URL (含 `/api`)
    pub booking_api_url: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 会话有效期 (小时)
    pub session_ttl_hours: i64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            booking_api_url: std::env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            session_ttl_hours: env_parse("SESSION_TTL_HOURS", 24),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 预订服务客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.booking_api_url).with_timeout(self.request_timeout())
    }
}

impl Default for Config {
    /// 不读环境变量的默认值 (测试用)
    fn default() -> Self {
        Self {
            http_port: 3000,
            booking_api_url: DEFAULT_BASE_URL.into(),
            request_timeout_ms: 30000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            session_ttl_hours: 24,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
