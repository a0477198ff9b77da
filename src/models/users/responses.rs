use super::entities::UserWithRoles;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

// 用户列表响应
pub type UserListResponse = PaginatedResponse<UserWithRoles>;

#[derive(Debug, Serialize)]
pub struct BatchDeleteResponse {
    pub deleted: u64,
    pub skipped: Vec<i64>,
}
