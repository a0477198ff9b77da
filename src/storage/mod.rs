use std::sync::Arc;

use crate::models::{
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    course_offerings::{
        entities::{CourseOffering, OfferingDetail},
        requests::{CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest},
        responses::OfferingListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentDetail},
        requests::EnrollmentListParams,
        responses::EnrollmentListResponse,
    },
    grades::{
        entities::{Grade, GradeDetail, GradeRecord},
        requests::GradeListParams,
        responses::GradeListResponse,
    },
    permissions::{
        catalog::{BuiltinRole, PermissionSpec},
        entities::Permission,
        requests::PermissionListParams,
        responses::PermissionListResponse,
    },
    reward_punishments::{
        entities::{RewardPunishment, RewardPunishmentDetail},
        requests::{
            CreateRewardPunishmentRequest, RewardPunishmentListParams,
            UpdateRewardPunishmentRequest,
        },
        responses::{RewardPunishmentListResponse, RewardPunishmentStatistics},
    },
    roles::{
        entities::{Role, RoleDetail},
        requests::{CreateRoleRequest, RoleListParams, UpdateRoleRequest},
        responses::RoleListResponse,
    },
    schedules::{
        entities::{Schedule, ScheduleConflictQuery, ScheduleDetail},
        requests::{CreateScheduleRequest, ScheduleListParams, UpdateScheduleRequest},
        responses::ScheduleListResponse,
    },
    statistics::responses::{DashboardStatistics, OverviewStatistics},
    student_status::{
        entities::{StudentStatusDetail, StudentStatusRecord},
        requests::{
            CreateStudentStatusRequest, StudentStatusListParams, UpdateStudentStatusRequest,
        },
        responses::StudentStatusListResponse,
    },
    students::{
        entities::{Student, StudentDetail},
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    teachers::{
        entities::{Teacher, TeacherDetail},
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::{User, UserWithRoles},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::timetable::TimeSlot;

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

/// 用户的有效授权：启用角色的编码，以及这些角色下启用权限的编码
#[derive(Debug, Clone, Default)]
pub struct UserAuthorities {
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

/// 业务规则冲突（容量、状态、引用）以 `SchoolSystemError::Conflict` 返回，
/// 引用对象不存在以 `SchoolSystemError::NotFound` 返回。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段为已哈希的密码），同时分配角色
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn get_user_with_roles(&self, id: i64) -> Result<Option<UserWithRoles>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息；role_ids 给出时整体替换角色
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    async fn set_user_roles(&self, user_id: i64, role_ids: Vec<i64>) -> Result<()>;
    async fn get_user_authorities(&self, user_id: i64) -> Result<UserAuthorities>;
    async fn count_users(&self) -> Result<u64>;

    /// 角色管理方法
    async fn create_role(&self, role: CreateRoleRequest) -> Result<Role>;
    async fn get_role_by_id(&self, id: i64) -> Result<Option<Role>>;
    async fn get_role_by_code(&self, code: &str) -> Result<Option<Role>>;
    async fn get_role_detail(&self, id: i64) -> Result<Option<RoleDetail>>;
    async fn list_roles_with_pagination(&self, query: RoleListParams) -> Result<RoleListResponse>;
    async fn list_all_roles(&self) -> Result<Vec<Role>>;
    async fn update_role(&self, id: i64, update: UpdateRoleRequest) -> Result<Option<Role>>;
    // 删除角色；仍有用户持有时返回冲突
    async fn delete_role(&self, id: i64) -> Result<bool>;
    async fn get_role_permissions(&self, role_id: i64) -> Result<Vec<Permission>>;
    async fn set_role_permissions(&self, role_id: i64, permission_ids: Vec<i64>) -> Result<()>;

    /// 权限方法
    async fn list_permissions_with_pagination(
        &self,
        query: PermissionListParams,
    ) -> Result<PermissionListResponse>;
    async fn list_all_permissions(&self) -> Result<Vec<Permission>>;
    // 同步权限目录，返回新增数量
    async fn ensure_permissions(&self, catalog: &[PermissionSpec]) -> Result<u64>;
    // 确保内置角色存在；新建时授予默认权限
    async fn ensure_builtin_role(&self, role: &BuiltinRole) -> Result<Role>;

    /// 部门管理方法
    async fn create_department(&self, dept: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse>;
    async fn list_all_departments(&self) -> Result<Vec<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_detail(&self, id: i64) -> Result<Option<TeacherDetail>>;
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<TeacherDetail>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 开课管理方法
    async fn create_offering(&self, offering: CreateOfferingRequest) -> Result<CourseOffering>;
    async fn get_offering_by_id(&self, id: i64) -> Result<Option<CourseOffering>>;
    async fn get_offering_detail(&self, id: i64) -> Result<Option<OfferingDetail>>;
    async fn list_offerings_with_pagination(
        &self,
        query: OfferingListParams,
    ) -> Result<OfferingListResponse>;
    async fn update_offering(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>>;
    async fn delete_offering(&self, id: i64) -> Result<bool>;
    async fn list_semesters(&self) -> Result<Vec<String>>;
    async fn list_offering_enrollments(&self, offering_id: i64) -> Result<Vec<EnrollmentDetail>>;

    /// 选课方法
    // auto_approve 为 true 时在同一事务内占用名额
    async fn create_enrollment(
        &self,
        student_id: i64,
        offering_id: i64,
        auto_approve: bool,
    ) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn get_enrollment_detail(&self, id: i64) -> Result<Option<EnrollmentDetail>>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse>;
    async fn approve_enrollment(&self, id: i64, reviewer_id: i64) -> Result<Enrollment>;
    async fn reject_enrollment(
        &self,
        id: i64,
        reviewer_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment>;
    async fn withdraw_enrollment(&self, id: i64) -> Result<Enrollment>;

    /// 成绩方法
    // 录入或更新成绩；选课未通过时返回冲突
    async fn upsert_grade(&self, enrollment_id: i64, record: GradeRecord) -> Result<Grade>;
    async fn list_grades_with_pagination(&self, query: GradeListParams)
    -> Result<GradeListResponse>;
    async fn list_student_grades(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<GradeDetail>>;
    async fn list_offering_grades(&self, offering_id: i64) -> Result<Vec<GradeDetail>>;

    /// 教室管理方法
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom>;
    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>>;
    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListParams,
    ) -> Result<ClassroomListResponse>;
    async fn list_all_classrooms(&self) -> Result<Vec<Classroom>>;
    // 指定时段内空闲且可用的教室
    async fn list_available_classrooms(
        &self,
        slot: TimeSlot,
        semester: Option<String>,
        min_capacity: Option<i64>,
        room_type: Option<String>,
    ) -> Result<Vec<Classroom>>;
    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, id: i64) -> Result<bool>;

    /// 排课方法
    // 创建与更新都会在事务内做冲突检测
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<Schedule>;
    async fn get_schedule_detail(&self, id: i64) -> Result<Option<ScheduleDetail>>;
    async fn list_schedules_with_pagination(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse>;
    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>>;
    async fn delete_schedule(&self, id: i64) -> Result<bool>;
    // 返回冲突描述，空表示无冲突
    async fn find_schedule_conflicts(&self, query: ScheduleConflictQuery) -> Result<Vec<String>>;
    async fn list_student_schedules(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>>;
    async fn list_teacher_schedules(
        &self,
        teacher_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>>;
    // 某学期全部排课（不分页），可按教师与教室过滤
    async fn list_semester_schedules(
        &self,
        semester: &str,
        teacher_id: Option<i64>,
        classroom_id: Option<i64>,
    ) -> Result<Vec<ScheduleDetail>>;

    /// 学籍异动方法
    async fn create_student_status(
        &self,
        record: CreateStudentStatusRequest,
        handler_id: i64,
    ) -> Result<StudentStatusRecord>;
    async fn get_student_status_detail(&self, id: i64) -> Result<Option<StudentStatusDetail>>;
    async fn list_student_status_with_pagination(
        &self,
        query: StudentStatusListParams,
    ) -> Result<StudentStatusListResponse>;
    async fn update_student_status(
        &self,
        id: i64,
        update: UpdateStudentStatusRequest,
    ) -> Result<Option<StudentStatusRecord>>;
    async fn delete_student_status(&self, id: i64) -> Result<bool>;
    async fn list_student_status_history(&self, student_id: i64)
    -> Result<Vec<StudentStatusRecord>>;
    // 生效日期不晚于今天的最新一条
    async fn get_current_student_status(
        &self,
        student_id: i64,
    ) -> Result<Option<StudentStatusRecord>>;

    /// 奖惩记录方法
    async fn create_reward_punishment(
        &self,
        record: CreateRewardPunishmentRequest,
        handler_id: i64,
    ) -> Result<RewardPunishment>;
    async fn get_reward_punishment_detail(
        &self,
        id: i64,
    ) -> Result<Option<RewardPunishmentDetail>>;
    async fn list_reward_punishments_with_pagination(
        &self,
        query: RewardPunishmentListParams,
    ) -> Result<RewardPunishmentListResponse>;
    async fn update_reward_punishment(
        &self,
        id: i64,
        update: UpdateRewardPunishmentRequest,
    ) -> Result<Option<RewardPunishment>>;
    async fn delete_reward_punishment(&self, id: i64) -> Result<bool>;
    async fn list_student_reward_punishments(
        &self,
        student_id: i64,
    ) -> Result<Vec<RewardPunishment>>;
    async fn reward_punishment_statistics(
        &self,
        student_id: Option<i64>,
    ) -> Result<RewardPunishmentStatistics>;
    // 已使用过的非空类别
    async fn list_reward_punishment_categories(&self) -> Result<Vec<String>>;

    /// 统计方法
    async fn overview_statistics(&self) -> Result<OverviewStatistics>;
    async fn teacher_dashboard(&self, teacher_id: i64) -> Result<DashboardStatistics>;
    async fn student_dashboard(&self, student_id: i64) -> Result<DashboardStatistics>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
