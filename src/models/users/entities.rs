use serde::{Deserialize, Serialize};

use crate::models::roles::entities::RoleBrief;

crate::define_string_enum! {
    /// 用户状态
    pub enum UserStatus {
        Active => "active",
        Inactive => "inactive",
        Locked => "locked",
    }
}

/// 内置管理员账号用户名
pub const BUILTIN_ADMIN_USERNAME: &str = "admin";

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub real_name: String,
    pub phone: Option<String>,
    pub status: UserStatus,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn is_builtin_admin(&self) -> bool {
        self.username == BUILTIN_ADMIN_USERNAME
    }
}

/// 带角色信息的用户（列表/详情）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRoles {
    #[serde(flatten)]
    pub user: User,
    pub roles: Vec<RoleBrief>,
}
