//! 教室实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub room_no: String,
    pub building: String,
    pub floor: Option<i32>,
    pub capacity: i32,
    pub room_type: String,
    /// JSON 数组文本
    pub equipment: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_classroom(self) -> crate::models::classrooms::entities::Classroom {
        use crate::models::classrooms::entities::{Classroom, ClassroomStatus, ClassroomType};

        Classroom {
            id: self.id,
            room_no: self.room_no,
            building: self.building,
            floor: self.floor,
            capacity: self.capacity,
            room_type: self.room_type.parse().unwrap_or(ClassroomType::Ordinary),
            equipment: serde_json::from_str(&self.equipment).unwrap_or_default(),
            status: self.status.parse().unwrap_or(ClassroomStatus::Disabled),
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
