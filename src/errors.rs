//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / message() 方法
/// - snake_case 便捷构造函数
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSystemError {
            $($variant(String),)*
        }

        impl SchoolSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSystemError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SchoolSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    Io("E013", "IO Error"),
}

impl SchoolSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为业务冲突（唯一约束、状态不允许等）
    pub fn is_conflict(&self) -> bool {
        matches!(self, SchoolSystemError::Conflict(_))
    }
}

impl fmt::Display for SchoolSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSystemError {}

impl From<sea_orm::DbErr> for SchoolSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束与外键约束属于业务冲突
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg))
            | Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                SchoolSystemError::Conflict(msg)
            }
            _ => SchoolSystemError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for SchoolSystemError {
    fn from(err: std::io::Error) -> Self {
        SchoolSystemError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSystemError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSystemError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolSystemError::database_config("test").code(), "E003");
        assert_eq!(SchoolSystemError::validation("test").code(), "E006");
        assert_eq!(SchoolSystemError::conflict("test").code(), "E008");
        assert_eq!(SchoolSystemError::authentication("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSystemError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            SchoolSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolSystemError::conflict("课程容量已满");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Conflict"));
        assert!(formatted.contains("课程容量已满"));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_from_db_err() {
        let err: SchoolSystemError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }
}
