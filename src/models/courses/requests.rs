use super::entities::CourseType;
use crate::models::common::{PaginationQuery, deserialize_option_bool, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CourseListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 课程编号或名称关键字
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub dept_id: Option<i64>,
    pub course_type: Option<CourseType>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub course_code: String,
    pub course_name: String,
    pub dept_id: Option<i64>,
    pub credits: f64,
    pub hours: i32,
    pub course_type: CourseType,
    pub description: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub dept_id: Option<i64>,
    pub credits: Option<f64>,
    pub hours: Option<i32>,
    pub course_type: Option<CourseType>,
    pub description: Option<String>,
    pub status: Option<bool>,
}
