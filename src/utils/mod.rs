pub mod department_tree;
pub mod extractor;
pub mod grading;
pub mod jwt;
pub mod menu;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod timetable;
pub mod validate;

pub use extractor::{
    SafeEnrollmentIdI64, SafeIDI64, SafeOfferingIdI64, SafeStudentIdI64, SafeUserIdI64,
};
pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use sql::escape_like_pattern;
