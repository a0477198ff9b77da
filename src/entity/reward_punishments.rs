//! 奖惩记录实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reward_punishments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub kind: String,
    pub category: String,
    pub description: Option<String>,
    pub occur_date: Date,
    pub handler_id: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::reward_punishments::entities::RewardPunishment {
        use crate::models::reward_punishments::entities::{RecordKind, RewardPunishment};

        RewardPunishment {
            id: self.id,
            student_id: self.student_id,
            kind: self.kind.parse().unwrap_or(RecordKind::Reward),
            category: self.category,
            description: self.description,
            occur_date: self.occur_date,
            handler_id: self.handler_id,
            created_at: to_datetime(self.created_at),
        }
    }
}
