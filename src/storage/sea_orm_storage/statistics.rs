use super::SeaOrmStorage;
use super::lookups::{courses_by_ids, offerings_by_ids};
use crate::entity::{
    classrooms, course_offerings, courses, departments, enrollments, grades, students, teachers,
    users,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    enrollments::entities::EnrollmentStatus,
    statistics::responses::{DashboardStatistics, OverviewStatistics},
};
use crate::utils::grading::summarize_credits;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use std::collections::HashMap;

macro_rules! count_all {
    ($db:expr, $entity:path, $label:literal) => {
        <$entity>::find().count($db).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("统计{}失败: {e}", $label))
        })?
    };
}

impl SeaOrmStorage {
    pub async fn overview_statistics_impl(&self) -> Result<OverviewStatistics> {
        let db = &self.db;
        let enrollments_with = |status: EnrollmentStatus| {
            enrollments::Entity::find().filter(enrollments::Column::Status.eq(status.as_str()))
        };

        Ok(OverviewStatistics {
            users: count_all!(db, users::Entity, "用户"),
            teachers: count_all!(db, teachers::Entity, "教师"),
            students: count_all!(db, students::Entity, "学生"),
            departments: count_all!(db, departments::Entity, "部门"),
            courses: count_all!(db, courses::Entity, "课程"),
            offerings: count_all!(db, course_offerings::Entity, "开课"),
            classrooms: count_all!(db, classrooms::Entity, "教室"),
            pending_enrollments: enrollments_with(EnrollmentStatus::Pending).count(db).await?,
            approved_enrollments: enrollments_with(EnrollmentStatus::Approved).count(db).await?,
        })
    }

    /// 教师仪表盘：任课数、已通过选课的学生人数、待录成绩数
    pub async fn teacher_dashboard_impl(&self, teacher_id: i64) -> Result<DashboardStatistics> {
        let offering_ids: Vec<i64> = course_offerings::Entity::find()
            .select_only()
            .column(course_offerings::Column::Id)
            .filter(course_offerings::Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(&self.db)
            .await?;

        let approved: Vec<(i64, i64)> = if offering_ids.is_empty() {
            Vec::new()
        } else {
            enrollments::Entity::find()
                .select_only()
                .column(enrollments::Column::Id)
                .column(enrollments::Column::StudentId)
                .filter(enrollments::Column::OfferingId.is_in(offering_ids.clone()))
                .filter(enrollments::Column::Status.eq(EnrollmentStatus::Approved.as_str()))
                .into_tuple()
                .all(&self.db)
                .await?
        };

        let mut student_ids: Vec<i64> = approved.iter().map(|(_, s)| *s).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        let graded = if approved.is_empty() {
            0
        } else {
            grades::Entity::find()
                .filter(
                    grades::Column::EnrollmentId.is_in(approved.iter().map(|(id, _)| *id)),
                )
                .filter(grades::Column::FinalScore.is_not_null())
                .count(&self.db)
                .await?
        };

        Ok(DashboardStatistics::Teacher {
            offerings: offering_ids.len() as u64,
            students: student_ids.len() as u64,
            pending_grades: (approved.len() as u64).saturating_sub(graded),
        })
    }

    /// 学生仪表盘：已选课程、待审核选课、已获学分与 GPA
    pub async fn student_dashboard_impl(&self, student_id: i64) -> Result<DashboardStatistics> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await?;

        let pending = rows
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Pending.as_str())
            .count() as u64;
        let approved: Vec<_> = rows
            .into_iter()
            .filter(|e| e.status == EnrollmentStatus::Approved.as_str())
            .collect();

        let offerings = offerings_by_ids(&self.db, approved.iter().map(|e| e.offering_id)).await?;
        let courses = courses_by_ids(&self.db, offerings.values().map(|o| o.course_id)).await?;
        let grade_map: HashMap<i64, grades::Model> = if approved.is_empty() {
            HashMap::new()
        } else {
            grades::Entity::find()
                .filter(grades::Column::EnrollmentId.is_in(approved.iter().map(|e| e.id)))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|g| (g.enrollment_id, g))
                .collect()
        };

        let summary = summarize_credits(approved.iter().filter_map(|e| {
            let offering = offerings.get(&e.offering_id)?;
            let course = courses.get(&offering.course_id)?;
            let grade = grade_map.get(&e.id);
            Some((
                course.credits,
                grade.and_then(|g| g.final_score),
                grade.and_then(|g| g.grade_point),
            ))
        }));

        Ok(DashboardStatistics::Student {
            enrolled_courses: approved.len() as u64,
            pending_enrollments: pending,
            earned_credits: summary.earned_credits,
            gpa: summary.gpa,
        })
    }
}
