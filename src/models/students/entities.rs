use serde::{Deserialize, Serialize};

// 学生档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_no: String,
    pub dept_id: Option<i64>,
    pub class_name: Option<String>,
    pub grade: Option<i32>,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生列表项（附带姓名、部门名称）
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub student: Student,
    pub real_name: String,
    pub username: String,
    pub email: String,
    pub dept_name: Option<String>,
}
