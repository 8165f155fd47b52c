//! 应用状态
//!
//! 只读：配置 + 预订服务客户端。每个请求克隆一份 (内部都是 Arc)。

use std::sync::Arc;

use cafe_client::{BookingApi, HttpClient};

use crate::core::{Config, Result};

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub api: Arc<dyn BookingApi>,
}

impl ServerState {
    /// 使用任意 [`BookingApi`] 实现构造 (测试时注入替身)
    pub fn new(config: Config, api: Arc<dyn BookingApi>) -> Self {
        Self {
            config: Arc::new(config),
            api,
        }
    }

    /// 按配置创建真实的 HTTP 客户端
    pub fn initialize(config: &Config) -> Result<Self> {
        let client: HttpClient = config.client_config().build_http_client()?;
        tracing::info!(
            booking_api = %client.base_url(),
            timeout_ms = config.request_timeout_ms,
            "Booking API client ready"
        );
        Ok(Self::new(config.clone(), Arc::new(client)))
    }

    pub fn api(&self) -> &dyn BookingApi {
        self.api.as_ref()
    }
}
