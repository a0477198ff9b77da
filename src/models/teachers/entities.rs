use serde::{Deserialize, Serialize};

// 教师档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub teacher_no: String,
    pub dept_id: Option<i64>,
    pub title: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师列表项（附带姓名、部门名称）
#[derive(Debug, Clone, Serialize)]
pub struct TeacherDetail {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub real_name: String,
    pub username: String,
    pub email: String,
    pub dept_name: Option<String>,
}
