use serde::Serialize;

// 全局统计（管理员）
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverviewStatistics {
    pub users: u64,
    pub teachers: u64,
    pub students: u64,
    pub departments: u64,
    pub courses: u64,
    pub offerings: u64,
    pub classrooms: u64,
    pub pending_enrollments: u64,
    pub approved_enrollments: u64,
}

// 仪表盘：按当前用户身份返回不同数据
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardStatistics {
    Admin(OverviewStatistics),
    Teacher {
        offerings: u64,
        students: u64,
        pending_grades: u64,
    },
    Student {
        enrolled_courses: u64,
        pending_enrollments: u64,
        earned_credits: f64,
        gpa: f64,
    },
    Basic {
        username: String,
    },
}
