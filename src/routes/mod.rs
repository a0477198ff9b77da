//! HTTP 路由
//!
//! 每个资源一个 `configure_*_routes`，全部挂在 `/api` 下。
//! 认证由 scope 级的 RequireJWT 完成，权限按方法用 RequirePermission 包装（任一权限即可）。

pub mod auth;
pub mod classrooms;
pub mod course_offerings;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod grades;
pub mod permissions;
pub mod reward_punishments;
pub mod roles;
pub mod schedules;
pub mod statistics;
pub mod student_status;
pub mod students;
pub mod teachers;
pub mod users;

pub use auth::configure_auth_routes;
pub use classrooms::configure_classroom_routes;
pub use course_offerings::configure_offering_routes;
pub use courses::configure_course_routes;
pub use departments::configure_department_routes;
pub use enrollments::configure_enrollment_routes;
pub use grades::configure_grade_routes;
pub use permissions::configure_permission_routes;
pub use reward_punishments::configure_reward_punishment_routes;
pub use roles::configure_role_routes;
pub use schedules::configure_schedule_routes;
pub use statistics::configure_statistics_routes;
pub use student_status::configure_student_status_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部业务路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_role_routes)
        .configure(configure_permission_routes)
        .configure(configure_department_routes)
        .configure(configure_teacher_routes)
        .configure(configure_student_routes)
        .configure(configure_course_routes)
        .configure(configure_offering_routes)
        .configure(configure_enrollment_routes)
        .configure(configure_grade_routes)
        .configure(configure_classroom_routes)
        .configure(configure_schedule_routes)
        .configure(configure_student_status_routes)
        .configure(configure_reward_punishment_routes)
        .configure(configure_statistics_routes);
}
