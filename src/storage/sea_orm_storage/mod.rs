//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classrooms;
mod course_offerings;
mod courses;
mod departments;
mod enrollments;
mod grades;
mod lookups;
mod permissions;
mod reward_punishments;
mod roles;
mod schedules;
mod statistics;
mod student_status;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::migrated(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);
        Ok(storage)
    }

    /// 直接按 URL 连接并迁移，`sqlite::memory:` 只保留一个连接
    pub async fn connect(url: &str) -> Result<Self> {
        let mut opt = ConnectOptions::new(url);
        if url.contains(":memory:") {
            opt.max_connections(1).min_connections(1);
        }
        opt.sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))?;
        Self::migrated(db).await
    }

    async fn migrated(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::{Storage, UserAuthorities};
use crate::utils::timetable::TimeSlot;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_user_with_roles(&self, id: i64) -> Result<Option<UserWithRoles>> {
        self.get_user_with_roles_impl(id).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_password_impl(id, password_hash).await
    }

    async fn set_user_roles(&self, user_id: i64, role_ids: Vec<i64>) -> Result<()> {
        self.set_user_roles_impl(user_id, role_ids).await
    }

    async fn get_user_authorities(&self, user_id: i64) -> Result<UserAuthorities> {
        self.get_user_authorities_impl(user_id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 角色模块
    async fn create_role(&self, role: CreateRoleRequest) -> Result<Role> {
        self.create_role_impl(role).await
    }

    async fn get_role_by_id(&self, id: i64) -> Result<Option<Role>> {
        self.get_role_by_id_impl(id).await
    }

    async fn get_role_by_code(&self, code: &str) -> Result<Option<Role>> {
        self.get_role_by_code_impl(code).await
    }

    async fn get_role_detail(&self, id: i64) -> Result<Option<RoleDetail>> {
        self.get_role_detail_impl(id).await
    }

    async fn list_roles_with_pagination(&self, query: RoleListParams) -> Result<RoleListResponse> {
        self.list_roles_with_pagination_impl(query).await
    }

    async fn list_all_roles(&self) -> Result<Vec<Role>> {
        self.list_all_roles_impl().await
    }

    async fn update_role(&self, id: i64, update: UpdateRoleRequest) -> Result<Option<Role>> {
        self.update_role_impl(id, update).await
    }

    async fn delete_role(&self, id: i64) -> Result<bool> {
        self.delete_role_impl(id).await
    }

    async fn get_role_permissions(&self, role_id: i64) -> Result<Vec<Permission>> {
        self.get_role_permissions_impl(role_id).await
    }

    async fn set_role_permissions(&self, role_id: i64, permission_ids: Vec<i64>) -> Result<()> {
        self.set_role_permissions_impl(role_id, permission_ids)
            .await
    }

    // 权限模块
    async fn list_permissions_with_pagination(
        &self,
        query: PermissionListParams,
    ) -> Result<PermissionListResponse> {
        self.list_permissions_with_pagination_impl(query).await
    }

    async fn list_all_permissions(&self) -> Result<Vec<Permission>> {
        self.list_all_permissions_impl().await
    }

    async fn ensure_permissions(&self, catalog: &[PermissionSpec]) -> Result<u64> {
        self.ensure_permissions_impl(catalog).await
    }

    async fn ensure_builtin_role(&self, role: &BuiltinRole) -> Result<Role> {
        self.ensure_builtin_role_impl(role).await
    }

    // 部门模块
    async fn create_department(&self, dept: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(dept).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn list_all_departments(&self) -> Result<Vec<Department>> {
        self.list_all_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_detail(&self, id: i64) -> Result<Option<TeacherDetail>> {
        self.get_teacher_detail_impl(id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<TeacherDetail>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_detail(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_detail_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 开课模块
    async fn create_offering(&self, offering: CreateOfferingRequest) -> Result<CourseOffering> {
        self.create_offering_impl(offering).await
    }

    async fn get_offering_by_id(&self, id: i64) -> Result<Option<CourseOffering>> {
        self.get_offering_by_id_impl(id).await
    }

    async fn get_offering_detail(&self, id: i64) -> Result<Option<OfferingDetail>> {
        self.get_offering_detail_impl(id).await
    }

    async fn list_offerings_with_pagination(
        &self,
        query: OfferingListParams,
    ) -> Result<OfferingListResponse> {
        self.list_offerings_with_pagination_impl(query).await
    }

    async fn update_offering(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>> {
        self.update_offering_impl(id, update).await
    }

    async fn delete_offering(&self, id: i64) -> Result<bool> {
        self.delete_offering_impl(id).await
    }

    async fn list_semesters(&self) -> Result<Vec<String>> {
        self.list_semesters_impl().await
    }

    async fn list_offering_enrollments(&self, offering_id: i64) -> Result<Vec<EnrollmentDetail>> {
        self.list_offering_enrollments_impl(offering_id).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        student_id: i64,
        offering_id: i64,
        auto_approve: bool,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, offering_id, auto_approve)
            .await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn get_enrollment_detail(&self, id: i64) -> Result<Option<EnrollmentDetail>> {
        self.get_enrollment_detail_impl(id).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn approve_enrollment(&self, id: i64, reviewer_id: i64) -> Result<Enrollment> {
        self.approve_enrollment_impl(id, reviewer_id).await
    }

    async fn reject_enrollment(
        &self,
        id: i64,
        reviewer_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment> {
        self.reject_enrollment_impl(id, reviewer_id, reason).await
    }

    async fn withdraw_enrollment(&self, id: i64) -> Result<Enrollment> {
        self.withdraw_enrollment_impl(id).await
    }

    // 成绩模块
    async fn upsert_grade(&self, enrollment_id: i64, record: GradeRecord) -> Result<Grade> {
        self.upsert_grade_impl(enrollment_id, record).await
    }

    async fn list_grades_with_pagination(
        &self,
        query: GradeListParams,
    ) -> Result<GradeListResponse> {
        self.list_grades_with_pagination_impl(query).await
    }

    async fn list_student_grades(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<GradeDetail>> {
        self.list_student_grades_impl(student_id, semester).await
    }

    async fn list_offering_grades(&self, offering_id: i64) -> Result<Vec<GradeDetail>> {
        self.list_offering_grades_impl(offering_id).await
    }

    // 教室模块
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom> {
        self.create_classroom_impl(classroom).await
    }

    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(id).await
    }

    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListParams,
    ) -> Result<ClassroomListResponse> {
        self.list_classrooms_with_pagination_impl(query).await
    }

    async fn list_all_classrooms(&self) -> Result<Vec<Classroom>> {
        self.list_all_classrooms_impl().await
    }

    async fn list_available_classrooms(
        &self,
        slot: TimeSlot,
        semester: Option<String>,
        min_capacity: Option<i64>,
        room_type: Option<String>,
    ) -> Result<Vec<Classroom>> {
        self.list_available_classrooms_impl(slot, semester, min_capacity, room_type)
            .await
    }

    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(id, update).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<bool> {
        self.delete_classroom_impl(id).await
    }

    // 排课模块
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<Schedule> {
        self.create_schedule_impl(schedule).await
    }

    async fn get_schedule_detail(&self, id: i64) -> Result<Option<ScheduleDetail>> {
        self.get_schedule_detail_impl(id).await
    }

    async fn list_schedules_with_pagination(
        &self,
        query: ScheduleListParams,
    ) -> Result<ScheduleListResponse> {
        self.list_schedules_with_pagination_impl(query).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<Schedule>> {
        self.update_schedule_impl(id, update).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    async fn find_schedule_conflicts(&self, query: ScheduleConflictQuery) -> Result<Vec<String>> {
        self.find_schedule_conflicts_impl(query).await
    }

    async fn list_student_schedules(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>> {
        self.list_student_schedules_impl(student_id, semester).await
    }

    async fn list_teacher_schedules(
        &self,
        teacher_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<ScheduleDetail>> {
        self.list_teacher_schedules_impl(teacher_id, semester).await
    }

    async fn list_semester_schedules(
        &self,
        semester: &str,
        teacher_id: Option<i64>,
        classroom_id: Option<i64>,
    ) -> Result<Vec<ScheduleDetail>> {
        self.list_semester_schedules_impl(semester, teacher_id, classroom_id)
            .await
    }

    // 学籍异动模块
    async fn create_student_status(
        &self,
        record: CreateStudentStatusRequest,
        handler_id: i64,
    ) -> Result<StudentStatusRecord> {
        self.create_student_status_impl(record, handler_id).await
    }

    async fn get_student_status_detail(&self, id: i64) -> Result<Option<StudentStatusDetail>> {
        self.get_student_status_detail_impl(id).await
    }

    async fn list_student_status_with_pagination(
        &self,
        query: StudentStatusListParams,
    ) -> Result<StudentStatusListResponse> {
        self.list_student_status_with_pagination_impl(query).await
    }

    async fn update_student_status(
        &self,
        id: i64,
        update: UpdateStudentStatusRequest,
    ) -> Result<Option<StudentStatusRecord>> {
        self.update_student_status_impl(id, update).await
    }

    async fn delete_student_status(&self, id: i64) -> Result<bool> {
        self.delete_student_status_impl(id).await
    }

    async fn list_student_status_history(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentStatusRecord>> {
        self.list_student_status_history_impl(student_id).await
    }

    async fn get_current_student_status(
        &self,
        student_id: i64,
    ) -> Result<Option<StudentStatusRecord>> {
        self.get_current_student_status_impl(student_id).await
    }

    // 奖惩模块
    async fn create_reward_punishment(
        &self,
        record: CreateRewardPunishmentRequest,
        handler_id: i64,
    ) -> Result<RewardPunishment> {
        self.create_reward_punishment_impl(record, handler_id).await
    }

    async fn get_reward_punishment_detail(
        &self,
        id: i64,
    ) -> Result<Option<RewardPunishmentDetail>> {
        self.get_reward_punishment_detail_impl(id).await
    }

    async fn list_reward_punishments_with_pagination(
        &self,
        query: RewardPunishmentListParams,
    ) -> Result<RewardPunishmentListResponse> {
        self.list_reward_punishments_with_pagination_impl(query)
            .await
    }

    async fn update_reward_punishment(
        &self,
        id: i64,
        update: UpdateRewardPunishmentRequest,
    ) -> Result<Option<RewardPunishment>> {
        self.update_reward_punishment_impl(id, update).await
    }

    async fn delete_reward_punishment(&self, id: i64) -> Result<bool> {
        self.delete_reward_punishment_impl(id).await
    }

    async fn list_student_reward_punishments(
        &self,
        student_id: i64,
    ) -> Result<Vec<RewardPunishment>> {
        self.list_student_reward_punishments_impl(student_id).await
    }

    async fn reward_punishment_statistics(
        &self,
        student_id: Option<i64>,
    ) -> Result<RewardPunishmentStatistics> {
        self.reward_punishment_statistics_impl(student_id).await
    }

    async fn list_reward_punishment_categories(&self) -> Result<Vec<String>> {
        self.list_reward_punishment_categories_impl().await
    }

    // 统计模块
    async fn overview_statistics(&self) -> Result<OverviewStatistics> {
        self.overview_statistics_impl().await
    }

    async fn teacher_dashboard(&self, teacher_id: i64) -> Result<DashboardStatistics> {
        self.teacher_dashboard_impl(teacher_id).await
    }

    async fn student_dashboard(&self, student_id: i64) -> Result<DashboardStatistics> {
        self.student_dashboard_impl(student_id).await
    }
}
