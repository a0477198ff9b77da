use serde::{Deserialize, Serialize};

crate::define_string_enum! {
    /// 选课状态
    pub enum EnrollmentStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

impl EnrollmentStatus {
    /// 占用名额或等待审批的状态，同一开课只允许存在一条
    pub fn is_active(&self) -> bool {
        matches!(self, EnrollmentStatus::Pending | EnrollmentStatus::Approved)
    }

    pub fn can_approve(&self) -> bool {
        *self == EnrollmentStatus::Pending
    }

    pub fn can_reject(&self) -> bool {
        *self == EnrollmentStatus::Pending
    }

    pub fn can_withdraw(&self) -> bool {
        self.is_active()
    }
}

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    pub status: EnrollmentStatus,
    pub reason: Option<String>,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reviewed_by: Option<i64>,
}

// 选课详情（附带学生、课程信息）
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub student_no: String,
    pub student_name: String,
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub credits: f64,
    pub semester: String,
    pub teacher_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(EnrollmentStatus::Pending.can_approve());
        assert!(!EnrollmentStatus::Approved.can_approve());
        assert!(EnrollmentStatus::Pending.can_reject());
        assert!(!EnrollmentStatus::Withdrawn.can_reject());
        assert!(EnrollmentStatus::Approved.can_withdraw());
        assert!(!EnrollmentStatus::Rejected.can_withdraw());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&EnrollmentStatus::Withdrawn).unwrap();
        assert_eq!(json, "\"withdrawn\"");
        let parsed: EnrollmentStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, EnrollmentStatus::Approved);
        assert!(serde_json::from_str::<EnrollmentStatus>("\"done\"").is_err());
    }
}
