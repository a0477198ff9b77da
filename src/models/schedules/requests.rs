use crate::models::common::{PaginationQuery, deserialize_option_bool, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub offering_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub classroom_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub teacher_id: Option<i64>,
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub day_of_week: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    pub offering_id: i64,
    pub classroom_id: i64,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub weeks: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduleRequest {
    pub offering_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub weeks: Option<String>,
}

// 冲突检测请求
#[derive(Debug, Clone, Deserialize)]
pub struct ConflictCheckRequest {
    pub classroom_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub weeks: String,
    pub semester: Option<String>,
    pub exclude_schedule_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MyScheduleParams {
    pub semester: Option<String>,
}

// 课程表视图参数；未给学期时使用最新学期
#[derive(Debug, Clone, Deserialize)]
pub struct GridViewParams {
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub classroom_id: Option<i64>,
    /// 缺省时标记冲突
    #[serde(default, deserialize_with = "deserialize_option_bool")]
    pub include_conflicts: Option<bool>,
}
