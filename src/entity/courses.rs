//! 课程实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub course_code: String,
    pub course_name: String,
    pub dept_id: Option<i64>,
    pub credits: f64,
    pub hours: i32,
    pub course_type: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DeptId",
        to = "super::departments::Column::Id",
        on_delete = "SetNull"
    )]
    Department,
    #[sea_orm(has_many = "super::course_offerings::Entity")]
    CourseOfferings,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::course_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOfferings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseType};

        Course {
            id: self.id,
            course_code: self.course_code,
            course_name: self.course_name,
            dept_id: self.dept_id,
            credits: self.credits,
            hours: self.hours,
            course_type: self.course_type.parse().unwrap_or(CourseType::Required),
            description: self.description,
            status: self.status,
            created_at: to_datetime(self.created_at),
            updated_at: to_datetime(self.updated_at),
        }
    }
}
