//! 数据模型定义
//!
//! 每个业务模块拆分为 entities（业务实体）、requests（请求参数）、responses（响应结构）。

/// 定义以字符串存储/传输的枚举
///
/// 自动生成 Display、FromStr、Serialize、Deserialize 以及 `ALL` 常量。
#[macro_export]
macro_rules! define_string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($name))),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "无效的取值: '{s}'. 支持: {}",
                        [$($value),*].join(", ")
                    ))
                })
            }
        }
    };
}

pub mod auth;
pub mod classrooms;
pub mod common;
pub mod course_offerings;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod grades;
pub mod menus;
pub mod permissions;
pub mod reward_punishments;
pub mod roles;
pub mod schedules;
pub mod statistics;
pub mod student_status;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；其余按模块分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用 1000-1099
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1005,
    InternalServerError = 1006,
    RateLimitExceeded = 1007,
    AuthFailed = 1008,
    UserDisabled = 1009,

    // 用户 2000-2099
    UserNotFound = 2000,
    UserAlreadyExists = 2001,
    UserNameInvalid = 2002,
    UserEmailInvalid = 2003,
    UserPasswordInvalid = 2004,
    UserPhoneInvalid = 2005,
    CanNotDeleteCurrentUser = 2006,
    PasswordMismatch = 2007,

    // 角色与权限 2100-2199
    RoleNotFound = 2100,
    RoleAlreadyExists = 2101,
    RoleInUse = 2102,
    RoleProtected = 2103,
    PermissionNotFound = 2104,

    // 部门 2200-2299
    DepartmentNotFound = 2200,
    DepartmentAlreadyExists = 2201,
    DepartmentInUse = 2202,
    DepartmentInvalidParent = 2203,

    // 教师与学生档案 2300-2399
    TeacherNotFound = 2300,
    TeacherAlreadyExists = 2301,
    StudentNotFound = 2302,
    StudentAlreadyExists = 2303,
    ProfileNotBound = 2304,

    // 课程与开课 3000-3099
    CourseNotFound = 3000,
    CourseAlreadyExists = 3001,
    CourseInUse = 3002,
    OfferingNotFound = 3003,
    OfferingInUse = 3004,
    OfferingClosed = 3005,
    OfferingCapacityInvalid = 3006,

    // 选课 3100-3199
    EnrollmentNotFound = 3100,
    EnrollmentDuplicate = 3101,
    EnrollmentFull = 3102,
    EnrollmentInvalidState = 3103,

    // 成绩 3200-3299
    GradeNotFound = 3200,
    GradeInvalidScore = 3201,
    GradeEnrollmentNotApproved = 3202,

    // 教室与排课 4000-4099
    ClassroomNotFound = 4000,
    ClassroomAlreadyExists = 4001,
    ClassroomInUse = 4002,
    ScheduleNotFound = 4003,
    ScheduleInvalidTime = 4004,
    ScheduleInvalidWeeks = 4005,
    ScheduleConflict = 4006,

    // 学籍与奖惩 5000-5099
    StudentStatusNotFound = 5000,
    StudentStatusInvalidDate = 5001,
    RewardPunishmentNotFound = 5002,
}
