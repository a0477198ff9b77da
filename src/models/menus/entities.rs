use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::permissions::codes::*;

// 侧边栏菜单项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// 任一权限即可见；为空表示不受限
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl MenuItem {
    pub fn new(title: &str, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: Some(icon.to_string()),
            path: None,
            permissions: Vec::new(),
            children: Vec::new(),
            hidden: false,
        }
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn permissions(mut self, codes: &[&str]) -> Self {
        self.permissions = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// 静态侧边栏菜单树，只读；过滤时在副本上进行
pub static SIDEBAR_MENU: Lazy<Vec<MenuItem>> = Lazy::new(|| {
    vec![
        MenuItem::new("仪表盘", "House").path("/dashboard"),
        MenuItem::new("系统管理", "Setting")
            .permissions(&[
                USER_MANAGE,
                ROLE_MANAGE,
                DEPARTMENT_MANAGE,
                TEACHER_MANAGE,
                STUDENT_MANAGE,
            ])
            .children(vec![
                MenuItem::new("用户管理", "User")
                    .path("/admin/users")
                    .permissions(&[USER_MANAGE]),
                MenuItem::new("角色管理", "UserFilled")
                    .path("/admin/roles")
                    .permissions(&[ROLE_MANAGE]),
                MenuItem::new("部门管理", "OfficeBuilding")
                    .path("/admin/departments")
                    .permissions(&[DEPARTMENT_MANAGE]),
                MenuItem::new("教师管理", "Avatar")
                    .path("/admin/teachers")
                    .permissions(&[TEACHER_MANAGE]),
                MenuItem::new("学生管理", "School")
                    .path("/admin/students")
                    .permissions(&[STUDENT_MANAGE]),
            ]),
        MenuItem::new("课程管理", "Reading")
            .permissions(&[COURSE_MANAGE, COURSE_OFFERING_MANAGE])
            .children(vec![
                MenuItem::new("课程信息", "Document")
                    .path("/academic/courses")
                    .permissions(&[COURSE_MANAGE]),
                MenuItem::new("开课管理", "Postcard")
                    .path("/academic/course-offerings")
                    .permissions(&[COURSE_OFFERING_MANAGE]),
            ]),
        MenuItem::new("教学管理", "Calendar")
            .permissions(&[SCHEDULE_MANAGE, CLASSROOM_MANAGE, GRADE_MANAGE])
            .children(vec![
                MenuItem::new("排课管理", "Calendar")
                    .path("/academic/schedules")
                    .permissions(&[SCHEDULE_MANAGE]),
                MenuItem::new("教室管理", "OfficeBuilding")
                    .path("/academic/classrooms")
                    .permissions(&[CLASSROOM_MANAGE]),
                MenuItem::new("成绩管理", "EditPen")
                    .path("/teacher/grades")
                    .permissions(&[GRADE_MANAGE]),
            ]),
        MenuItem::new("学生管理", "School")
            .permissions(&[STUDENT_STATUS_MANAGE, REWARD_PUNISHMENT_MANAGE])
            .children(vec![
                MenuItem::new("学籍管理", "School")
                    .path("/academic/student-status")
                    .permissions(&[STUDENT_STATUS_MANAGE]),
                MenuItem::new("奖惩管理", "Trophy")
                    .path("/academic/reward-punishment")
                    .permissions(&[REWARD_PUNISHMENT_MANAGE]),
            ]),
        MenuItem::new("我的课程", "Document")
            .path("/teacher/my-courses")
            .permissions(&[MY_COURSES_VIEW]),
        MenuItem::new("选课中心", "Plus")
            .path("/student/courses")
            .permissions(&[MY_ENROLLMENT_VIEW]),
        MenuItem::new("成绩查询", "View")
            .path("/student/grades")
            .permissions(&[MY_GRADE_VIEW]),
        MenuItem::new("个人信息", "UserFilled").path("/profile"),
    ]
});
