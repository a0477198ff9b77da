//! 成绩实体

use sea_orm::entity::prelude::*;

use super::to_datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub enrollment_id: i64,
    pub usual_score: Option<f64>,
    pub exam_score: Option<f64>,
    pub final_score: Option<f64>,
    pub grade_point: Option<f64>,
    pub letter_grade: Option<String>,
    pub recorded_by: Option<i64>,
    pub recorded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollments::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollments::Column::Id",
        on_delete = "Cascade"
    )]
    Enrollment,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        crate::models::grades::entities::Grade {
            id: self.id,
            enrollment_id: self.enrollment_id,
            usual_score: self.usual_score,
            exam_score: self.exam_score,
            final_score: self.final_score,
            grade_point: self.grade_point,
            letter_grade: self.letter_grade,
            recorded_by: self.recorded_by,
            recorded_at: to_datetime(self.recorded_at),
        }
    }
}
