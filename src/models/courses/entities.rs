use serde::{Deserialize, Serialize};

crate::define_string_enum! {
    /// 课程类型：必修 / 选修 / 公选
    pub enum CourseType {
        Required => "required",
        Elective => "elective",
        PublicElective => "public_elective",
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub dept_id: Option<i64>,
    pub credits: f64,
    pub hours: i32,
    pub course_type: CourseType,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
