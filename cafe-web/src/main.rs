use cafe_web::{Config, Server, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env
    let _ = dotenvy::dotenv();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 日志 (生产环境输出 JSON)
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    )
    .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    print_banner();
    tracing::info!("☕ Cafe web starting (env: {})", config.environment);

    // 4. 启动 HTTP 服务器
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
