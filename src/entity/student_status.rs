//! 学籍异动实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub status_type: String,
    pub effective_date: Date,
    pub end_date: Option<Date>,
    pub reason: Option<String>,
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
    pub fn into_record(self) -> crate::models::student_status::entities::StudentStatusRecord {
        use crate::models::student_status::entities::{StatusType, StudentStatusRecord};

        StudentStatusRecord {
            id: self.id,
            student_id: self.student_id,
            status_type: self.status_type.parse().unwrap_or(StatusType::Enrolled),
            effective_date: self.effective_date,
            end_date: self.end_date,
            reason: self.reason,
            handler_id: self.handler_id,
            created_at: to_datetime(self.created_at),
        }
    }
}
