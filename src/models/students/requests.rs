use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub dept_id: Option<i64>,
    pub class_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub grade: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub student_no: String,
    pub dept_id: Option<i64>,
    pub class_name: Option<String>,
    pub grade: Option<i32>,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub student_no: Option<String>,
    pub dept_id: Option<i64>,
    pub class_name: Option<String>,
    pub grade: Option<i32>,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
}

// 成绩单查询
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptParams {
    pub semester: Option<String>,
}
