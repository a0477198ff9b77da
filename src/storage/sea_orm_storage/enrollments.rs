use sea_orm::ExprTrait;
use super::SeaOrmStorage;
use super::lookups::{enrollment_details, fetch_page, offering_ids_for_semester};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::{course_offerings, students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    enrollments::{
        entities::{Enrollment, EnrollmentDetail, EnrollmentStatus},
        requests::EnrollmentListParams,
        responses::EnrollmentListResponse,
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 占用一个名额；已满时返回冲突
async fn take_seat<C: ConnectionTrait>(db: &C, offering_id: i64) -> Result<()> {
    use course_offerings::Column as O;

    let result = course_offerings::Entity::update_many()
        .col_expr(O::CurrentStudents, Expr::col(O::CurrentStudents).add(1))
        .filter(O::Id.eq(offering_id))
        .filter(Expr::col(O::CurrentStudents).lt(Expr::col(O::MaxStudents)))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(SchoolSystemError::conflict("开课名额已满"));
    }
    Ok(())
}

/// 释放一个名额，计数不会小于 0
async fn release_seat<C: ConnectionTrait>(db: &C, offering_id: i64) -> Result<()> {
    use course_offerings::Column as O;

    course_offerings::Entity::update_many()
        .col_expr(O::CurrentStudents, Expr::col(O::CurrentStudents).sub(1))
        .filter(O::Id.eq(offering_id))
        .filter(O::CurrentStudents.gt(0))
        .exec(db)
        .await?;
    Ok(())
}

fn parse_status(model: &crate::entity::enrollments::Model) -> EnrollmentStatus {
    model.status.parse().unwrap_or(EnrollmentStatus::Pending)
}

impl SeaOrmStorage {
    /// 创建选课；开课须开放且未满，同一开课不能重复待审或已通过
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        offering_id: i64,
        auto_approve: bool,
    ) -> Result<Enrollment> {
        let txn = self.db.begin().await?;

        if students::Entity::find_by_id(student_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(SchoolSystemError::not_found(format!(
                "学生 {student_id} 不存在"
            )));
        }
        let Some(offering) = course_offerings::Entity::find_by_id(offering_id)
            .one(&txn)
            .await?
        else {
            return Err(SchoolSystemError::not_found(format!(
                "开课 {offering_id} 不存在"
            )));
        };
        if !offering.status {
            return Err(SchoolSystemError::conflict("该开课未开放选课"));
        }
        if offering.current_students >= offering.max_students {
            return Err(SchoolSystemError::conflict("开课名额已满"));
        }

        let active = [
            EnrollmentStatus::Pending.to_string(),
            EnrollmentStatus::Approved.to_string(),
        ];
        let duplicate = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::OfferingId.eq(offering_id))
            .filter(Column::Status.is_in(active))
            .one(&txn)
            .await?;
        if duplicate.is_some() {
            return Err(SchoolSystemError::conflict("已选过该课程"));
        }

        let now = chrono::Utc::now().timestamp();
        let status = if auto_approve {
            take_seat(&txn, offering_id).await?;
            EnrollmentStatus::Approved
        } else {
            EnrollmentStatus::Pending
        };

        let enrollment = ActiveModel {
            student_id: Set(student_id),
            offering_id: Set(offering_id),
            status: Set(status.to_string()),
            reason: Set(None),
            enrolled_at: Set(now),
            reviewed_at: Set(auto_approve.then_some(now)),
            reviewed_by: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(enrollment.into_enrollment())
    }

    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询选课失败: {e}")))?;
        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn get_enrollment_detail_impl(&self, id: i64) -> Result<Option<EnrollmentDetail>> {
        let Some(enrollment) = Enrollments::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(enrollment_details(&self.db, vec![enrollment]).await?.pop())
    }

    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        let mut select = Enrollments::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(offering_id) = query.offering_id {
            select = select.filter(Column::OfferingId.eq(offering_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(ids) = offering_ids_for_semester(&self.db, query.semester.as_deref()).await? {
            select = select.filter(Column::OfferingId.is_in(ids));
        }

        let select = select
            .order_by_desc(Column::EnrolledAt)
            .order_by_desc(Column::Id);
        let (rows, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: enrollment_details(&self.db, rows).await?,
            pagination,
        })
    }

    /// 审批通过：检查容量并占用名额
    pub async fn approve_enrollment_impl(&self, id: i64, reviewer_id: i64) -> Result<Enrollment> {
        let txn = self.db.begin().await?;
        let Some(existing) = Enrollments::find_by_id(id).one(&txn).await? else {
            return Err(SchoolSystemError::not_found(format!("选课记录 {id} 不存在")));
        };
        if !parse_status(&existing).can_approve() {
            return Err(SchoolSystemError::conflict(format!(
                "当前状态 {} 不能审批",
                existing.status
            )));
        }

        take_seat(&txn, existing.offering_id).await?;

        let mut model: ActiveModel = existing.into();
        model.status = Set(EnrollmentStatus::Approved.to_string());
        model.reviewed_at = Set(Some(chrono::Utc::now().timestamp()));
        model.reviewed_by = Set(Some(reviewer_id));
        let enrollment = model.update(&txn).await?;

        txn.commit().await?;
        Ok(enrollment.into_enrollment())
    }

    pub async fn reject_enrollment_impl(
        &self,
        id: i64,
        reviewer_id: i64,
        reason: Option<String>,
    ) -> Result<Enrollment> {
        let txn = self.db.begin().await?;
        let Some(existing) = Enrollments::find_by_id(id).one(&txn).await? else {
            return Err(SchoolSystemError::not_found(format!("选课记录 {id} 不存在")));
        };
        if !parse_status(&existing).can_reject() {
            return Err(SchoolSystemError::conflict(format!(
                "当前状态 {} 不能驳回",
                existing.status
            )));
        }

        let mut model: ActiveModel = existing.into();
        model.status = Set(EnrollmentStatus::Rejected.to_string());
        model.reason = Set(reason);
        model.reviewed_at = Set(Some(chrono::Utc::now().timestamp()));
        model.reviewed_by = Set(Some(reviewer_id));
        let enrollment = model.update(&txn).await?;

        txn.commit().await?;
        Ok(enrollment.into_enrollment())
    }

    /// 退课；已通过的选课释放名额
    pub async fn withdraw_enrollment_impl(&self, id: i64) -> Result<Enrollment> {
        let txn = self.db.begin().await?;
        let Some(existing) = Enrollments::find_by_id(id).one(&txn).await? else {
            return Err(SchoolSystemError::not_found(format!("选课记录 {id} 不存在")));
        };
        let status = parse_status(&existing);
        if !status.can_withdraw() {
            return Err(SchoolSystemError::conflict(format!(
                "当前状态 {status} 不能退课"
            )));
        }
        if status == EnrollmentStatus::Approved {
            release_seat(&txn, existing.offering_id).await?;
        }

        let mut model: ActiveModel = existing.into();
        model.status = Set(EnrollmentStatus::Withdrawn.to_string());
        let enrollment = model.update(&txn).await?;

        txn.commit().await?;
        Ok(enrollment.into_enrollment())
    }
}
