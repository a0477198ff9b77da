use crate::models::common::{PaginationQuery, deserialize_option_bool, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferingListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub status: Option<bool>,
    /// 课程名称或编号关键字
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferingRequest {
    pub course_id: i64,
    pub teacher_id: i64,
    pub semester: String,
    pub max_students: Option<i32>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOfferingRequest {
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    pub max_students: Option<i32>,
    pub status: Option<bool>,
}
