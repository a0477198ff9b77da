use crate::models::common::{
    PaginationQuery, deserialize_option_bool, deserialize_option_i64, deserialize_some,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub parent_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub dept_name: String,
    pub dept_code: String,
    pub parent_id: Option<i64>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub dept_name: Option<String>,
    pub dept_code: Option<String>,
    /// 缺失表示不修改，null 表示移到顶层
    #[serde(default, deserialize_with = "deserialize_some")]
    pub parent_id: Option<Option<i64>>,
    pub description: Option<String>,
    pub status: Option<bool>,
}
