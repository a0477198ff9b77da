use crate::models::common::{PaginationQuery, deserialize_option_bool};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RoleListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoleRequest {
    pub role_name: String,
    pub role_code: String,
    pub description: Option<String>,
    pub status: Option<bool>,
    #[serde(default)]
    pub permission_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoleRequest {
    pub role_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct AssignPermissionsRequest {
    pub permission_ids: Vec<i64>,
}
