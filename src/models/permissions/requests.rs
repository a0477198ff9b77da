use crate::models::common::PaginationQuery;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub module: Option<String>,
    pub search: Option<String>,
}
