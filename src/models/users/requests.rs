use super::entities::UserStatus;
use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub role_id: Option<i64>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    pub role_id: Option<i64>,
}

impl From<UserListParams> for UserListQuery {
    fn from(params: UserListParams) -> Self {
        Self {
            pagination: params.pagination,
            search: params.search,
            status: params.status,
            role_id: params.role_id,
        }
    }
}

// 用户创建请求，password 在进入存储层前被替换为哈希
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub real_name: String,
    pub phone: Option<String>,
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub role_ids: Vec<i64>,
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<UserStatus>,
    pub role_ids: Option<Vec<i64>>,
}

// 管理员重置密码
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// 分配角色
#[derive(Debug, Deserialize)]
pub struct AssignRolesRequest {
    pub role_ids: Vec<i64>,
}
