use serde::{Deserialize, Serialize};

// 排课：开课在某教室的固定时间段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub offering_id: i64,
    pub classroom_id: i64,
    /// 1-7 表示周一到周日
    pub day_of_week: i32,
    /// "HH:MM"
    pub start_time: String,
    pub end_time: String,
    /// 如 "1-16" 或 "1-8,10,12-16"
    pub weeks: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 排课详情（附带课程、教师、教室信息）
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDetail {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub course_code: String,
    pub course_name: String,
    pub semester: String,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub room_no: String,
    pub building: String,
}

// 冲突检测条件：教室或教师任一给出即检查对应维度
#[derive(Debug, Clone)]
pub struct ScheduleConflictQuery {
    pub slot: crate::utils::timetable::TimeSlot,
    pub classroom_id: Option<i64>,
    pub teacher_id: Option<i64>,
    /// 给出时只与同一学期的排课比较
    pub semester: Option<String>,
    pub exclude_schedule_id: Option<i64>,
}
