use crate::config::AppConfig;
use crate::errors::{Result, SchoolHubError};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 安装 TLS 加密后端、连接数据库并完成迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装（例如测试中多次调用）时忽略错误
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let config = AppConfig::get();
    if config.is_production() && config.jwt.secret == DEFAULT_JWT_SECRET {
        warn!("JWT secret is still the default value, set JWT_SECRET in production");
    }
    debug!(
        "Submission policy: allow_resubmit_after_grading={}, transaction_timeout={}ms",
        config.submission.allow_resubmit_after_grading, config.database.transaction_timeout
    );

    let storage = crate::storage::create_storage().await.map_err(|e| {
        SchoolHubError::database_connection(format!("存储后端初始化失败: {}", e.message()))
    })?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}
