use serde::{Deserialize, Serialize};

use crate::models::permissions::entities::Permission;

/// 内置角色编码
pub const SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const ACADEMIC_ADMIN: &str = "ACADEMIC_ADMIN";
pub const TEACHER: &str = "TEACHER";
pub const STUDENT: &str = "STUDENT";

/// 不可删除的内置角色
pub const PROTECTED_ROLES: &[&str] = &[SUPER_ADMIN];

// 角色实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    pub role_code: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Role {
    pub fn is_protected(&self) -> bool {
        PROTECTED_ROLES.contains(&self.role_code.as_str())
    }
}

// 角色简要信息（嵌入用户数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBrief {
    pub id: i64,
    pub role_name: String,
    pub role_code: String,
}

impl From<&Role> for RoleBrief {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name.clone(),
            role_code: role.role_code.clone(),
        }
    }
}

// 角色详情（含权限、用户数）
#[derive(Debug, Clone, Serialize)]
pub struct RoleDetail {
    #[serde(flatten)]
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub user_count: u64,
}
