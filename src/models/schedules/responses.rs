use super::entities::ScheduleDetail;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

pub type ScheduleListResponse = PaginatedResponse<ScheduleDetail>;

#[derive(Debug, Clone, Serialize)]
pub struct ConflictCheckResponse {
    pub conflicts: bool,
    pub details: Vec<String>,
}

// 课程表中的一格
#[derive(Debug, Clone, Serialize)]
pub struct GridEntry {
    #[serde(flatten)]
    pub detail: ScheduleDetail,
    pub day_name: &'static str,
    pub has_conflict: bool,
    /// 与之冲突的排课 ID
    pub conflict_with: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGridResponse {
    pub semester: Option<String>,
    pub items: Vec<GridEntry>,
}
