use super::entities::StatusType;
use crate::models::common::{PaginationQuery, deserialize_option_i64, deserialize_some};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentStatusListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub student_id: Option<i64>,
    pub status_type: Option<StatusType>,
    /// 学号或姓名关键字
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentStatusRequest {
    pub student_id: i64,
    pub status_type: StatusType,
    pub effective_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentStatusRequest {
    pub status_type: Option<StatusType>,
    pub effective_date: Option<chrono::NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<chrono::NaiveDate>>,
    pub reason: Option<String>,
}
