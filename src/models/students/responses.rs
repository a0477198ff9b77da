use super::entities::StudentDetail;
use crate::models::common::PaginatedResponse;
use crate::models::grades::entities::GradeDetail;
use serde::Serialize;

pub type StudentListResponse = PaginatedResponse<StudentDetail>;

// 成绩单中的一门课程
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    #[serde(flatten)]
    pub grade: GradeDetail,
    pub level: &'static str,
}

// 成绩单
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub student: StudentDetail,
    pub semester: Option<String>,
    pub courses: Vec<TranscriptEntry>,
    pub total_credits: f64,
    pub earned_credits: f64,
    pub gpa: f64,
}

// GPA 汇总
#[derive(Debug, Clone, Serialize)]
pub struct GpaResponse {
    pub student_id: i64,
    pub gpa: f64,
    pub total_credits: f64,
    pub earned_credits: f64,
    pub graded_courses: u64,
}
