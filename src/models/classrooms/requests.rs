use super::entities::{ClassroomStatus, ClassroomType};
use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassroomListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 教室编号关键字
    pub search: Option<String>,
    pub building: Option<String>,
    pub room_type: Option<ClassroomType>,
    pub status: Option<ClassroomStatus>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub min_capacity: Option<i64>,
}

// 查询空闲教室
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableClassroomParams {
    #[serde(deserialize_with = "crate::models::common::params::deserialize_i64_lenient")]
    pub day_of_week: i64,
    pub start_time: String,
    pub end_time: String,
    pub weeks: String,
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub min_capacity: Option<i64>,
    pub room_type: Option<ClassroomType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassroomRequest {
    pub room_no: String,
    pub building: String,
    pub floor: Option<i32>,
    pub capacity: i32,
    pub room_type: ClassroomType,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub status: Option<ClassroomStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassroomRequest {
    pub room_no: Option<String>,
    pub building: Option<String>,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
    pub room_type: Option<ClassroomType>,
    pub equipment: Option<Vec<String>>,
    pub status: Option<ClassroomStatus>,
}
