pub mod pagination;
pub mod params;
pub mod response;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use params::{deserialize_option_bool, deserialize_option_i64, deserialize_some};
pub use response::ApiResponse;

use serde::Deserialize;

/// 批量删除请求
#[derive(Debug, Clone, Deserialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<i64>,
}
