use std::net::SocketAddr;
use std::time::Duration;

use dashboard::{AppState, application::relay::relay_router, build_router, config::Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    let state = AppState::new(config);

    let host = state.config.server_host;

    // 定期清理过期会话
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired().await;
            if purged > 0 {
                tracing::debug!("清理过期会话 {} 个", purged);
            }
        }
    });

    // WebSocket 中继单独监听
    let relay_addr = SocketAddr::new(host, state.config.relay_port);
    let relay_app = relay_router(state.relay.clone());
    let relay_listener = tokio::net::TcpListener::bind(&relay_addr)
        .await
        .expect("Failed to bind relay listener");
    tracing::info!("Relay listening on ws://{}", relay_addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(relay_listener, relay_app).await {
            tracing::error!("Relay server stopped: {}", e);
        }
    });

    // 启动服务器
    let addr = SocketAddr::new(host, state.config.server_port);
    let app = build_router(state);
    tracing::info!("Server listening on http://{} (GraphQL at /graphql)", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Failed to start server");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
