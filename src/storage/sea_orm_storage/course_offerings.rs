use super::SeaOrmStorage;
use super::lookups::{enrollment_details, fetch_page, offering_details};
use crate::entity::course_offerings::{ActiveModel, Column, Entity as CourseOfferings, Relation};
use crate::entity::{courses, enrollments, teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    course_offerings::{
        entities::{CourseOffering, DEFAULT_MAX_STUDENTS, OfferingDetail},
        requests::{CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest},
        responses::OfferingListResponse,
    },
    enrollments::entities::EnrollmentDetail,
};
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

async fn ensure_teacher_exists<C: ConnectionTrait>(db: &C, teacher_id: i64) -> Result<()> {
    if teachers::Entity::find_by_id(teacher_id).one(db).await?.is_none() {
        return Err(SchoolSystemError::not_found(format!(
            "教师 {teacher_id} 不存在"
        )));
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 创建开课；课程与教师必须存在
    pub async fn create_offering_impl(&self, req: CreateOfferingRequest) -> Result<CourseOffering> {
        if courses::Entity::find_by_id(req.course_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(SchoolSystemError::not_found(format!(
                "课程 {} 不存在",
                req.course_id
            )));
        }
        ensure_teacher_exists(&self.db, req.teacher_id).await?;

        let now = chrono::Utc::now().timestamp();
        let offering = ActiveModel {
            course_id: Set(req.course_id),
            teacher_id: Set(req.teacher_id),
            semester: Set(req.semester),
            max_students: Set(req.max_students.unwrap_or(DEFAULT_MAX_STUDENTS)),
            current_students: Set(0),
            status: Set(req.status.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(offering.into_offering())
    }

    pub async fn get_offering_by_id_impl(&self, id: i64) -> Result<Option<CourseOffering>> {
        let result = CourseOfferings::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询开课失败: {e}")))?;
        Ok(result.map(|m| m.into_offering()))
    }

    pub async fn get_offering_detail_impl(&self, id: i64) -> Result<Option<OfferingDetail>> {
        let Some(offering) = CourseOfferings::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(offering_details(&self.db, vec![offering]).await?.pop())
    }

    pub async fn list_offerings_with_pagination_impl(
        &self,
        query: OfferingListParams,
    ) -> Result<OfferingListResponse> {
        let mut select = CourseOfferings::find().join(JoinType::InnerJoin, Relation::Course.def());

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(ref semester) = query.semester
            && !semester.trim().is_empty()
        {
            select = select.filter(Column::Semester.eq(semester.trim()));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(
                &[courses::Column::CourseCode, courses::Column::CourseName],
                search,
            ));
        }

        let select = select
            .order_by_desc(Column::Semester)
            .order_by_asc(Column::Id);
        let (offerings, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: offering_details(&self.db, offerings).await?,
            pagination,
        })
    }

    /// 更新开课；容量不能低于已选人数
    pub async fn update_offering_impl(
        &self,
        id: i64,
        update: UpdateOfferingRequest,
    ) -> Result<Option<CourseOffering>> {
        let txn = self.db.begin().await?;
        let Some(existing) = CourseOfferings::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(max) = update.max_students
            && max < existing.current_students
        {
            return Err(SchoolSystemError::conflict(format!(
                "容量 {max} 小于已选人数 {}",
                existing.current_students
            )));
        }
        if let Some(teacher_id) = update.teacher_id {
            ensure_teacher_exists(&txn, teacher_id).await?;
        }

        let mut model: ActiveModel = existing.into();
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }
        if let Some(max) = update.max_students {
            model.max_students = Set(max);
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let offering = model.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(offering.into_offering()))
    }

    /// 删除开课；仍有选课记录时拒绝，排课随之级联删除
    pub async fn delete_offering_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let enrolled = enrollments::Entity::find()
            .filter(enrollments::Column::OfferingId.eq(id))
            .count(&txn)
            .await?;
        if enrolled > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "该开课仍有 {enrolled} 条选课记录"
            )));
        }

        let result = CourseOfferings::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    /// 已有开课的学期，新学期在前
    pub async fn list_semesters_impl(&self) -> Result<Vec<String>> {
        let semesters: Vec<String> = CourseOfferings::find()
            .select_only()
            .column(Column::Semester)
            .distinct()
            .order_by_desc(Column::Semester)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(semesters)
    }

    /// 开课名单（全部状态）
    pub async fn list_offering_enrollments_impl(
        &self,
        offering_id: i64,
    ) -> Result<Vec<EnrollmentDetail>> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::OfferingId.eq(offering_id))
            .order_by_asc(enrollments::Column::EnrolledAt)
            .order_by_asc(enrollments::Column::Id)
            .all(&self.db)
            .await?;
        enrollment_details(&self.db, rows).await
    }
}
