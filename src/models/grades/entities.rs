use serde::{Deserialize, Serialize};

// 成绩，与选课记录一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub usual_score: Option<f64>,
    pub exam_score: Option<f64>,
    pub final_score: Option<f64>,
    pub grade_point: Option<f64>,
    pub letter_grade: Option<String>,
    pub recorded_by: Option<i64>,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

// 成绩详情（附带学生、课程信息）
#[derive(Debug, Clone, Serialize)]
pub struct GradeDetail {
    #[serde(flatten)]
    pub grade: Grade,
    pub student_id: i64,
    pub student_no: String,
    pub student_name: String,
    pub offering_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub credits: f64,
    pub semester: String,
}

// 已计算好的成绩数据，写入存储层
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRecord {
    pub usual_score: Option<f64>,
    pub exam_score: Option<f64>,
    pub final_score: Option<f64>,
    pub grade_point: Option<f64>,
    pub letter_grade: Option<String>,
    pub recorded_by: Option<i64>,
}
