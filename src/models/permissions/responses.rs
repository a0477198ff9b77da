use super::entities::Permission;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

pub type PermissionListResponse = PaginatedResponse<Permission>;

#[derive(Debug, Clone, Serialize)]
pub struct PermissionModule {
    pub code: &'static str,
    pub name: &'static str,
}

// 按模块分组
#[derive(Debug, Clone, Serialize)]
pub struct PermissionGroup {
    pub module: String,
    pub module_name: String,
    pub permissions: Vec<Permission>,
}
