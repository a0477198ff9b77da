use tokio::signal;
use tracing::{error, warn};

/// 等待 Ctrl+C，收到后返回以便优雅停机
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        error!("无法监听 Ctrl+C 信号: {e}");
        std::future::pending::<()>().await;
    }
    warn!("收到停机信号，开始优雅停机...");
}
