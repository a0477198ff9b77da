use serde::{Deserialize, Serialize};

crate::define_string_enum! {
    /// 奖励 / 惩罚
    pub enum RecordKind {
        Reward => "reward",
        Punishment => "punishment",
    }
}

// 奖惩记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardPunishment {
    pub id: i64,
    pub student_id: i64,
    pub kind: RecordKind,
    pub category: String,
    pub description: Option<String>,
    pub occur_date: chrono::NaiveDate,
    pub handler_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewardPunishmentDetail {
    #[serde(flatten)]
    pub record: RewardPunishment,
    pub student_no: String,
    pub student_name: String,
    pub handler_name: Option<String>,
}
