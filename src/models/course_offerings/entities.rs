use serde::{Deserialize, Serialize};

/// 默认开课容量
pub const DEFAULT_MAX_STUDENTS: i32 = 50;

// 开课：某门课程在某学期由某位教师讲授
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseOffering {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub semester: String,
    pub max_students: i32,
    pub current_students: i32,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 开课详情（附带课程与教师信息）
#[derive(Debug, Clone, Serialize)]
pub struct OfferingDetail {
    #[serde(flatten)]
    pub offering: CourseOffering,
    pub course_code: String,
    pub course_name: String,
    pub credits: f64,
    pub teacher_no: String,
    pub teacher_name: String,
}
