//! 排课实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub offering_id: i64,
    pub classroom_id: i64,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub weeks: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_offerings::Entity",
        from = "Column::OfferingId",
        to = "super::course_offerings::Column::Id",
        on_delete = "Cascade"
    )]
    Offering,
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id",
        on_delete = "Restrict"
    )]
    Classroom,
}

impl Related<super::course_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offering.def()
    }
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_schedule(self) -> crate::models::schedules::entities::Schedule {
        crate::models::schedules::entities::Schedule {
            id: self.id,
            offering_id: self.offering_id,
            classroom_id: self.classroom_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            weeks: self.weeks,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
