use super::entities::EnrollmentStatus;
use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub offering_id: Option<i64>,
    pub status: Option<EnrollmentStatus>,
    pub semester: Option<String>,
}

// 学生自选时 student_id 省略；管理员代选时必须提供
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub offering_id: i64,
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RejectEnrollmentRequest {
    pub reason: Option<String>,
}
