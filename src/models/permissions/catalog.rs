//! 权限目录
//!
//! 系统启动时按此目录补齐权限表，并为内置角色分配默认权限。

use crate::models::roles::entities::{ACADEMIC_ADMIN, STUDENT, SUPER_ADMIN, TEACHER};

/// 权限编码常量
pub mod codes {
    macro_rules! permission_codes {
        ($($name:ident),* $(,)?) => {
            $(pub const $name: &str = stringify!($name);)*
        };
    }

    permission_codes! {
        USER_MANAGE, USER_CREATE, USER_UPDATE, USER_DELETE, USER_VIEW, USER_EDIT,
        ROLE_MANAGE, ROLE_CREATE, ROLE_UPDATE, ROLE_DELETE, ROLE_VIEW, ROLE_EDIT,
        COURSE_MANAGE, COURSE_CREATE, COURSE_UPDATE, COURSE_DELETE, COURSE_VIEW, COURSE_EDIT,
        COURSE_OFFERING_MANAGE, COURSE_OFFERING_CREATE, COURSE_OFFERING_UPDATE,
        COURSE_OFFERING_DELETE, COURSE_OFFERING_VIEW, COURSE_OFFERING_EDIT,
        ENROLLMENT_MANAGE, ENROLLMENT_APPROVE, ENROLLMENT_VIEW, ENROLLMENT_CREATE,
        ENROLLMENT_EDIT, ENROLLMENT_DELETE,
        GRADE_MANAGE, GRADE_INPUT, GRADE_UPDATE, GRADE_VIEW, GRADE_EDIT,
        SCHEDULE_MANAGE, SCHEDULE_CREATE, SCHEDULE_UPDATE, SCHEDULE_DELETE, SCHEDULE_VIEW,
        SCHEDULE_EDIT,
        STUDENT_STATUS_MANAGE, STUDENT_STATUS_UPDATE, STUDENT_STATUS_VIEW,
        REWARD_PUNISHMENT_MANAGE, REWARD_PUNISHMENT_CREATE, REWARD_PUNISHMENT_UPDATE,
        REWARD_PUNISHMENT_DELETE, REWARD_PUNISHMENT_VIEW,
        SYSTEM_MANAGE,
        DEPARTMENT_MANAGE, DEPARTMENT_VIEW, DEPARTMENT_CREATE, DEPARTMENT_EDIT, DEPARTMENT_DELETE,
        CLASSROOM_MANAGE, CLASSROOM_VIEW,
        TEACHER_MANAGE, TEACHER_VIEW, TEACHER_CREATE, TEACHER_EDIT, TEACHER_DELETE,
        STUDENT_MANAGE, STUDENT_VIEW, STUDENT_CREATE, STUDENT_EDIT, STUDENT_DELETE,
        MY_COURSES_VIEW, STUDENT_LIST_VIEW, MY_ENROLLMENT_VIEW, MY_GRADE_VIEW, MY_SCHEDULE_VIEW,
    }
}

use codes::*;

/// 权限目录项
#[derive(Debug, Clone, Copy)]
pub struct PermissionSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub module: &'static str,
    pub description: &'static str,
}

const fn spec(
    code: &'static str,
    name: &'static str,
    module: &'static str,
    description: &'static str,
) -> PermissionSpec {
    PermissionSpec {
        code,
        name,
        module,
        description,
    }
}

/// 权限模块 (code, name)
pub const MODULES: &[(&str, &str)] = &[
    ("user", "用户管理"),
    ("role", "角色管理"),
    ("course", "课程管理"),
    ("enrollment", "选课管理"),
    ("grade", "成绩管理"),
    ("schedule", "排课管理"),
    ("student", "学生管理"),
    ("system", "系统管理"),
    ("teacher", "教师管理"),
];

pub fn module_name(module: &str) -> &'static str {
    MODULES
        .iter()
        .find(|(code, _)| *code == module)
        .map(|(_, name)| *name)
        .unwrap_or("其他")
}

pub const PERMISSION_CATALOG: &[PermissionSpec] = &[
    spec(USER_MANAGE, "用户管理", "user", "用户管理权限"),
    spec(USER_CREATE, "用户创建", "user", "创建用户权限"),
    spec(USER_UPDATE, "用户更新", "user", "更新用户权限"),
    spec(USER_DELETE, "用户删除", "user", "删除用户权限"),
    spec(USER_VIEW, "用户查看", "user", "查看用户权限"),
    spec(USER_EDIT, "用户编辑", "user", "编辑用户权限"),
    spec(ROLE_MANAGE, "角色管理", "role", "角色管理权限"),
    spec(ROLE_CREATE, "角色创建", "role", "创建角色权限"),
    spec(ROLE_UPDATE, "角色更新", "role", "更新角色权限"),
    spec(ROLE_DELETE, "角色删除", "role", "删除角色权限"),
    spec(ROLE_VIEW, "角色查看", "role", "查看角色权限"),
    spec(ROLE_EDIT, "角色编辑", "role", "编辑角色权限"),
    spec(COURSE_MANAGE, "课程管理", "course", "课程管理权限"),
    spec(COURSE_CREATE, "课程创建", "course", "创建课程权限"),
    spec(COURSE_UPDATE, "课程更新", "course", "更新课程权限"),
    spec(COURSE_DELETE, "课程删除", "course", "删除课程权限"),
    spec(COURSE_VIEW, "课程查看", "course", "查看课程权限"),
    spec(COURSE_EDIT, "课程编辑", "course", "编辑课程权限"),
    spec(COURSE_OFFERING_MANAGE, "开课管理", "course", "开课管理权限"),
    spec(COURSE_OFFERING_CREATE, "开课创建", "course", "创建开课权限"),
    spec(COURSE_OFFERING_UPDATE, "开课更新", "course", "更新开课权限"),
    spec(COURSE_OFFERING_DELETE, "开课删除", "course", "删除开课权限"),
    spec(COURSE_OFFERING_VIEW, "开课查看", "course", "查看开课权限"),
    spec(COURSE_OFFERING_EDIT, "开课编辑", "course", "编辑开课权限"),
    spec(ENROLLMENT_MANAGE, "选课管理", "enrollment", "选课管理权限"),
    spec(ENROLLMENT_APPROVE, "选课审批", "enrollment", "选课审批权限"),
    spec(ENROLLMENT_VIEW, "选课查看", "enrollment", "查看选课权限"),
    spec(ENROLLMENT_CREATE, "选课创建", "enrollment", "创建选课权限"),
    spec(ENROLLMENT_EDIT, "选课编辑", "enrollment", "编辑选课权限"),
    spec(ENROLLMENT_DELETE, "选课删除", "enrollment", "删除选课权限"),
    spec(GRADE_MANAGE, "成绩管理", "grade", "成绩管理权限"),
    spec(GRADE_INPUT, "成绩录入", "grade", "成绩录入权限"),
    spec(GRADE_UPDATE, "成绩更新", "grade", "成绩更新权限"),
    spec(GRADE_VIEW, "成绩查看", "grade", "成绩查看权限"),
    spec(GRADE_EDIT, "成绩编辑", "grade", "成绩编辑权限"),
    spec(SCHEDULE_MANAGE, "排课管理", "schedule", "排课管理权限"),
    spec(SCHEDULE_CREATE, "排课创建", "schedule", "创建排课权限"),
    spec(SCHEDULE_UPDATE, "排课更新", "schedule", "更新排课权限"),
    spec(SCHEDULE_DELETE, "排课删除", "schedule", "删除排课权限"),
    spec(SCHEDULE_VIEW, "排课查看", "schedule", "查看排课权限"),
    spec(SCHEDULE_EDIT, "排课编辑", "schedule", "编辑排课权限"),
    spec(STUDENT_STATUS_MANAGE, "学籍管理", "student", "学籍管理权限"),
    spec(STUDENT_STATUS_UPDATE, "学籍更新", "student", "学籍更新权限"),
    spec(STUDENT_STATUS_VIEW, "学籍查看", "student", "学籍查看权限"),
    spec(REWARD_PUNISHMENT_MANAGE, "奖惩管理", "student", "奖惩管理权限"),
    spec(REWARD_PUNISHMENT_CREATE, "奖惩创建", "student", "创建奖惩权限"),
    spec(REWARD_PUNISHMENT_UPDATE, "奖惩更新", "student", "更新奖惩权限"),
    spec(REWARD_PUNISHMENT_DELETE, "奖惩删除", "student", "删除奖惩权限"),
    spec(REWARD_PUNISHMENT_VIEW, "奖惩查看", "student", "查看奖惩权限"),
    spec(SYSTEM_MANAGE, "系统管理", "system", "系统管理权限"),
    spec(DEPARTMENT_MANAGE, "部门管理", "system", "部门管理权限"),
    spec(CLASSROOM_MANAGE, "教室管理", "system", "教室管理权限"),
    spec(CLASSROOM_VIEW, "教室查看", "system", "教室查看权限"),
    spec(DEPARTMENT_VIEW, "部门查看", "system", "部门查看权限"),
    spec(DEPARTMENT_CREATE, "部门创建", "system", "部门创建权限"),
    spec(DEPARTMENT_EDIT, "部门编辑", "system", "部门编辑权限"),
    spec(DEPARTMENT_DELETE, "部门删除", "system", "部门删除权限"),
    spec(TEACHER_MANAGE, "教师管理", "teacher", "教师管理权限"),
    spec(TEACHER_VIEW, "教师查看", "teacher", "教师查看权限"),
    spec(TEACHER_CREATE, "教师创建", "teacher", "教师创建权限"),
    spec(TEACHER_EDIT, "教师编辑", "teacher", "教师编辑权限"),
    spec(TEACHER_DELETE, "教师删除", "teacher", "教师删除权限"),
    spec(STUDENT_MANAGE, "学生管理", "student", "学生管理权限"),
    spec(STUDENT_VIEW, "学生查看", "student", "学生查看权限"),
    spec(STUDENT_CREATE, "学生创建", "student", "学生创建权限"),
    spec(STUDENT_EDIT, "学生编辑", "student", "学生编辑权限"),
    spec(STUDENT_DELETE, "学生删除", "student", "学生删除权限"),
    spec(MY_COURSES_VIEW, "我的课程查看", "course", "查看我的课程权限"),
    spec(STUDENT_LIST_VIEW, "学生名单查看", "course", "查看学生名单权限"),
    spec(MY_ENROLLMENT_VIEW, "我的选课查看", "enrollment", "查看我的选课权限"),
    spec(MY_GRADE_VIEW, "我的成绩查看", "grade", "查看我的成绩权限"),
    spec(MY_SCHEDULE_VIEW, "我的课表查看", "schedule", "查看我的课表权限"),
];

/// 内置角色定义
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRole {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// None 表示拥有全部权限
    pub permissions: Option<&'static [&'static str]>,
}

const ACADEMIC_ADMIN_PERMISSIONS: &[&str] = &[
    USER_VIEW,
    DEPARTMENT_MANAGE,
    DEPARTMENT_VIEW,
    DEPARTMENT_CREATE,
    DEPARTMENT_EDIT,
    DEPARTMENT_DELETE,
    TEACHER_MANAGE,
    TEACHER_VIEW,
    TEACHER_CREATE,
    TEACHER_EDIT,
    TEACHER_DELETE,
    STUDENT_MANAGE,
    STUDENT_VIEW,
    STUDENT_CREATE,
    STUDENT_EDIT,
    STUDENT_DELETE,
    COURSE_MANAGE,
    COURSE_VIEW,
    COURSE_CREATE,
    COURSE_EDIT,
    COURSE_UPDATE,
    COURSE_DELETE,
    COURSE_OFFERING_MANAGE,
    COURSE_OFFERING_VIEW,
    COURSE_OFFERING_CREATE,
    COURSE_OFFERING_EDIT,
    COURSE_OFFERING_UPDATE,
    COURSE_OFFERING_DELETE,
    ENROLLMENT_MANAGE,
    ENROLLMENT_VIEW,
    ENROLLMENT_APPROVE,
    ENROLLMENT_CREATE,
    ENROLLMENT_DELETE,
    GRADE_MANAGE,
    GRADE_VIEW,
    SCHEDULE_MANAGE,
    SCHEDULE_VIEW,
    SCHEDULE_CREATE,
    SCHEDULE_EDIT,
    SCHEDULE_UPDATE,
    SCHEDULE_DELETE,
    CLASSROOM_MANAGE,
    CLASSROOM_VIEW,
    STUDENT_STATUS_MANAGE,
    STUDENT_STATUS_VIEW,
    STUDENT_STATUS_UPDATE,
    REWARD_PUNISHMENT_MANAGE,
    REWARD_PUNISHMENT_VIEW,
    REWARD_PUNISHMENT_CREATE,
    REWARD_PUNISHMENT_UPDATE,
    REWARD_PUNISHMENT_DELETE,
];

const TEACHER_PERMISSIONS: &[&str] = &[
    MY_COURSES_VIEW,
    STUDENT_LIST_VIEW,
    COURSE_VIEW,
    COURSE_OFFERING_VIEW,
    GRADE_INPUT,
    GRADE_UPDATE,
    GRADE_VIEW,
    SCHEDULE_VIEW,
    CLASSROOM_VIEW,
    MY_SCHEDULE_VIEW,
];

const STUDENT_PERMISSIONS: &[&str] = &[
    MY_ENROLLMENT_VIEW,
    MY_GRADE_VIEW,
    MY_SCHEDULE_VIEW,
    ENROLLMENT_CREATE,
    COURSE_VIEW,
    COURSE_OFFERING_VIEW,
];

pub const BUILTIN_ROLES: &[BuiltinRole] = &[
    BuiltinRole {
        code: SUPER_ADMIN,
        name: "超级管理员",
        description: "拥有系统全部权限",
        permissions: None,
    },
    BuiltinRole {
        code: ACADEMIC_ADMIN,
        name: "教务管理员",
        description: "负责课程、排课、学籍等教务工作",
        permissions: Some(ACADEMIC_ADMIN_PERMISSIONS),
    },
    BuiltinRole {
        code: TEACHER,
        name: "教师",
        description: "授课教师",
        permissions: Some(TEACHER_PERMISSIONS),
    },
    BuiltinRole {
        code: STUDENT,
        name: "学生",
        description: "在校学生",
        permissions: Some(STUDENT_PERMISSIONS),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_unique() {
        let mut seen = HashSet::new();
        for spec in PERMISSION_CATALOG {
            assert!(seen.insert(spec.code), "duplicate code {}", spec.code);
        }
        assert_eq!(PERMISSION_CATALOG.len(), 72);
    }

    #[test]
    fn test_catalog_modules_known() {
        for spec in PERMISSION_CATALOG {
            assert_ne!(module_name(spec.module), "其他", "{}", spec.code);
        }
    }

    #[test]
    fn test_builtin_role_permissions_in_catalog() {
        let catalog: HashSet<&str> = PERMISSION_CATALOG.iter().map(|s| s.code).collect();
        for role in BUILTIN_ROLES {
            for code in role.permissions.unwrap_or(&[]) {
                assert!(catalog.contains(code), "{} -> {}", role.code, code);
            }
        }
    }
}
