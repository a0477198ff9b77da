use serde::{Deserialize, Serialize};

crate::define_string_enum! {
    /// 学籍状态：在读 / 休学 / 复学 / 转学 / 退学 / 毕业
    pub enum StatusType {
        Enrolled => "enrolled",
        Suspended => "suspended",
        Resumed => "resumed",
        Transferred => "transferred",
        Withdrawn => "withdrawn",
        Graduated => "graduated",
    }
}

// 学籍变动记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentStatusRecord {
    pub id: i64,
    pub student_id: i64,
    pub status_type: StatusType,
    pub effective_date: chrono::NaiveDate,
    pub end_date: Option<chrono::NaiveDate>,
    pub reason: Option<String>,
    pub handler_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 带学生信息的学籍记录
#[derive(Debug, Clone, Serialize)]
pub struct StudentStatusDetail {
    #[serde(flatten)]
    pub record: StudentStatusRecord,
    pub student_no: String,
    pub student_name: String,
    pub handler_name: Option<String>,
}
