use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{ObjectCache, create_object_cache};
use crate::errors::Result;
use crate::models::permissions::catalog::{BUILTIN_ROLES, PERMISSION_CATALOG};
use crate::models::roles::entities::SUPER_ADMIN;
use crate::models::users::entities::{BUILTIN_ADMIN_USERNAME, UserStatus};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_initial_password;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 补齐权限目录与内置角色，返回超级管理员角色 ID
pub async fn seed_catalog(storage: &Arc<dyn Storage>) -> Result<Option<i64>> {
    let inserted = storage.ensure_permissions(PERMISSION_CATALOG).await?;
    if inserted > 0 {
        info!("新增 {inserted} 项权限");
    }

    let mut super_admin = None;
    for builtin in BUILTIN_ROLES {
        let role = storage.ensure_builtin_role(builtin).await?;
        debug!("内置角色 {} 就绪 (ID: {})", role.role_code, role.id);
        if role.role_code == SUPER_ADMIN {
            super_admin = Some(role.id);
        }
    }
    Ok(super_admin)
}

/// 没有任何用户时创建默认管理员
///
/// 密码取自 `ADMIN_PASSWORD`，未设置时随机生成并打印到日志。
pub async fn seed_admin(storage: &Arc<dyn Storage>, super_admin_role: Option<i64>) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("已有 {count} 个用户，跳过管理员初始化");
        return Ok(());
    }

    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            let generated = generate_initial_password();
            warn!("==========================================================");
            warn!("  未设置 ADMIN_PASSWORD，已生成管理员初始密码: {generated}");
            warn!("  请妥善保存，或设置 ADMIN_PASSWORD 环境变量");
            warn!("==========================================================");
            generated
        }
    };

    let admin = CreateUserRequest {
        username: BUILTIN_ADMIN_USERNAME.to_string(),
        email: "admin@school.local".to_string(),
        password: hash_password(&password)?,
        real_name: "系统管理员".to_string(),
        phone: None,
        status: Some(UserStatus::Active),
        role_ids: super_admin_role.into_iter().collect(),
    };
    let user = storage.create_user(admin).await?;
    info!("默认管理员已创建 (ID: {}, 用户名: {})", user.id, user.username);
    Ok(())
}

/// 准备服务器启动的上下文：存储、初始数据与缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls 加密提供者已安装");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("存储后端已初始化，迁移完成");

    let super_admin = seed_catalog(&storage).await?;
    seed_admin(&storage, super_admin).await?;

    let cache = create_object_cache().await?;
    warn!("缓存后端已初始化");

    Ok(StartupContext { storage, cache })
}
