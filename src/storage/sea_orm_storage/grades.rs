use super::SeaOrmStorage;
use super::lookups::{fetch_page, grade_details, offering_ids_for_semester};
use crate::entity::enrollments;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    enrollments::entities::EnrollmentStatus,
    grades::{
        entities::{Grade, GradeDetail, GradeRecord},
        requests::GradeListParams,
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

fn apply_record(model: &mut ActiveModel, record: GradeRecord, recorded_at: i64) {
    model.usual_score = Set(record.usual_score);
    model.exam_score = Set(record.exam_score);
    model.final_score = Set(record.final_score);
    model.grade_point = Set(record.grade_point);
    model.letter_grade = Set(record.letter_grade);
    model.recorded_by = Set(record.recorded_by);
    model.recorded_at = Set(recorded_at);
}

impl SeaOrmStorage {
    /// 录入或更新成绩；只允许已通过的选课
    pub async fn upsert_grade_impl(&self, enrollment_id: i64, record: GradeRecord) -> Result<Grade> {
        let txn = self.db.begin().await?;

        let Some(enrollment) = enrollments::Entity::find_by_id(enrollment_id)
            .one(&txn)
            .await?
        else {
            return Err(SchoolSystemError::not_found(format!(
                "选课记录 {enrollment_id} 不存在"
            )));
        };
        if enrollment.status != EnrollmentStatus::Approved.as_str() {
            return Err(SchoolSystemError::conflict("选课未通过审批，不能录入成绩"));
        }

        let now = chrono::Utc::now().timestamp();
        let existing = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .one(&txn)
            .await?;

        let grade = match existing {
            Some(grade) => {
                let mut model: ActiveModel = grade.into();
                apply_record(&mut model, record, now);
                model.update(&txn).await?
            }
            None => {
                let mut model = ActiveModel {
                    enrollment_id: Set(enrollment_id),
                    ..Default::default()
                };
                apply_record(&mut model, record, now);
                model.insert(&txn).await?
            }
        };

        txn.commit().await?;
        Ok(grade.into_grade())
    }

    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListParams,
    ) -> Result<GradeListResponse> {
        let mut select = Grades::find();

        let semester_offerings =
            offering_ids_for_semester(&self.db, query.semester.as_deref()).await?;
        if query.offering_id.is_some() || query.student_id.is_some() || semester_offerings.is_some()
        {
            let mut enrollment_select = enrollments::Entity::find()
                .select_only()
                .column(enrollments::Column::Id);
            if let Some(offering_id) = query.offering_id {
                enrollment_select =
                    enrollment_select.filter(enrollments::Column::OfferingId.eq(offering_id));
            }
            if let Some(student_id) = query.student_id {
                enrollment_select =
                    enrollment_select.filter(enrollments::Column::StudentId.eq(student_id));
            }
            if let Some(ids) = semester_offerings {
                enrollment_select = enrollment_select.filter(enrollments::Column::OfferingId.is_in(ids));
            }
            let enrollment_ids: Vec<i64> = enrollment_select.into_tuple().all(&self.db).await?;
            select = select.filter(Column::EnrollmentId.is_in(enrollment_ids));
        }

        let select = select.order_by_desc(Column::RecordedAt).order_by_desc(Column::Id);
        let (grades, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: grade_details(&self.db, grades).await?,
            pagination,
        })
    }

    /// 学生全部成绩，可按学期过滤；新学期在前，同学期按课程代码排序
    pub async fn list_student_grades_impl(
        &self,
        student_id: i64,
        semester: Option<String>,
    ) -> Result<Vec<GradeDetail>> {
        let mut enrollment_select = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::Id)
            .filter(enrollments::Column::StudentId.eq(student_id));
        if let Some(ids) = offering_ids_for_semester(&self.db, semester.as_deref()).await? {
            enrollment_select = enrollment_select.filter(enrollments::Column::OfferingId.is_in(ids));
        }
        let enrollment_ids: Vec<i64> = enrollment_select.into_tuple().all(&self.db).await?;
        if enrollment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let grades = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .all(&self.db)
            .await?;
        let mut details = grade_details(&self.db, grades).await?;
        details.sort_by(|a, b| {
            b.semester
                .cmp(&a.semester)
                .then_with(|| a.course_code.cmp(&b.course_code))
        });
        Ok(details)
    }

    pub async fn list_offering_grades_impl(&self, offering_id: i64) -> Result<Vec<GradeDetail>> {
        let enrollment_ids: Vec<i64> = enrollments::Entity::find()
            .select_only()
            .column(enrollments::Column::Id)
            .filter(enrollments::Column::OfferingId.eq(offering_id))
            .into_tuple()
            .all(&self.db)
            .await?;
        if enrollment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let grades = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .all(&self.db)
            .await?;
        let mut details = grade_details(&self.db, grades).await?;
        details.sort_by(|a, b| a.student_no.cmp(&b.student_no));
        Ok(details)
    }
}
