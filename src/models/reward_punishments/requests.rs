use super::entities::RecordKind;
use crate::models::common::{PaginationQuery, deserialize_option_i64};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardPunishmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub student_id: Option<i64>,
    pub kind: Option<RecordKind>,
    pub category: Option<String>,
    /// 学号或姓名关键字
    pub search: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRewardPunishmentRequest {
    pub student_id: i64,
    pub kind: RecordKind,
    pub category: String,
    pub description: Option<String>,
    pub occur_date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRewardPunishmentRequest {
    pub kind: Option<RecordKind>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub occur_date: Option<chrono::NaiveDate>,
}

// 奖惩统计，省略 student_id 时统计全部学生
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardPunishmentStatisticsParams {
    #[serde(default, deserialize_with = "deserialize_option_i64")]
    pub student_id: Option<i64>,
}
