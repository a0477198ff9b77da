use super::entities::RewardPunishmentDetail;
use crate::models::common::PaginatedResponse;
use serde::Serialize;

pub type RewardPunishmentListResponse = PaginatedResponse<RewardPunishmentDetail>;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub kind: String,
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardPunishmentStatistics {
    pub total: i64,
    pub rewards: i64,
    pub punishments: i64,
    pub by_category: Vec<CategoryCount>,
}
