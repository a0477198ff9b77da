//! 选课实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub offering_id: i64,
    pub status: String,
    pub reason: Option<String>,
    pub enrolled_at: i64,
    pub reviewed_at: Option<i64>,
    pub reviewed_by: Option<i64>,
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
    #[sea_orm(
        belongs_to = "super::course_offerings::Entity",
        from = "Column::OfferingId",
        to = "super::course_offerings::Column::Id",
        on_delete = "Cascade"
    )]
    Offering,
    #[sea_orm(has_one = "super::grades::Entity")]
    Grade,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offering.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_enrollment(self) -> crate::models::enrollments::entities::Enrollment {
        use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};

        Enrollment {
            id: self.id,
            student_id: self.student_id,
            offering_id: self.offering_id,
            status: self.status.parse().unwrap_or(EnrollmentStatus::Pending),
            reason: self.reason,
            enrolled_at: to_datetime(self.enrolled_at),
            reviewed_at: self.reviewed_at.map(to_datetime),
            reviewed_by: self.reviewed_by,
        }
    }
}
