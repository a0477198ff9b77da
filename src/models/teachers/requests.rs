use crate::models::common::{PaginationQuery, deserialize_option_bool, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub dept_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub user_id: i64,
    pub teacher_no: String,
    pub dept_id: Option<i64>,
    pub title: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherRequest {
    pub teacher_no: Option<String>,
    pub dept_id: Option<i64>,
    pub title: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
    pub status: Option<bool>,
}
