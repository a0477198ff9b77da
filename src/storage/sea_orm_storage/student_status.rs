use super::SeaOrmStorage;
use super::lookups::{fetch_page, student_ids_matching, student_status_details};
use crate::entity::student_status::{ActiveModel, Column, Entity as StudentStatus};
use crate::entity::students;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    student_status::{
        entities::{StudentStatusDetail, StudentStatusRecord},
        requests::{CreateStudentStatusRequest, StudentStatusListParams, UpdateStudentStatusRequest},
        responses::StudentStatusListResponse,
    },
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub(super) async fn ensure_student_exists<C: ConnectionTrait>(db: &C, student_id: i64) -> Result<()> {
    if students::Entity::find_by_id(student_id).one(db).await?.is_none() {
        return Err(SchoolSystemError::not_found(format!("学生 {student_id} 不存在")));
    }
    Ok(())
}

fn check_period(effective: NaiveDate, end: Option<NaiveDate>) -> Result<()> {
    match end {
        Some(end) if end < effective => Err(SchoolSystemError::validation(
            "结束日期不能早于生效日期",
        )),
        _ => Ok(()),
    }
}

fn normalize_reason(reason: Option<String>) -> Option<String> {
    reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

impl SeaOrmStorage {
    pub async fn create_student_status_impl(
        &self,
        req: CreateStudentStatusRequest,
        handler_id: i64,
    ) -> Result<StudentStatusRecord> {
        check_period(req.effective_date, req.end_date)?;
        ensure_student_exists(&self.db, req.student_id).await?;

        let record = ActiveModel {
            student_id: Set(req.student_id),
            status_type: Set(req.status_type.to_string()),
            effective_date: Set(req.effective_date),
            end_date: Set(req.end_date),
            reason: Set(normalize_reason(req.reason)),
            handler_id: Set(Some(handler_id)),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(record.into_record())
    }

    pub async fn get_student_status_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<StudentStatusDetail>> {
        let Some(record) = StudentStatus::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学籍记录失败: {e}")))?
        else {
            return Ok(None);
        };
        Ok(student_status_details(&self.db, vec![record]).await?.pop())
    }

    pub async fn list_student_status_with_pagination_impl(
        &self,
        query: StudentStatusListParams,
    ) -> Result<StudentStatusListResponse> {
        let mut select = StudentStatus::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(ref status_type) = query.status_type {
            select = select.filter(Column::StatusType.eq(status_type.to_string()));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let ids = student_ids_matching(&self.db, search.trim()).await?;
            select = select.filter(Column::StudentId.is_in(ids));
        }

        let select = select
            .order_by_desc(Column::EffectiveDate)
            .order_by_desc(Column::Id);
        let (rows, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: student_status_details(&self.db, rows).await?,
            pagination,
        })
    }

    pub async fn update_student_status_impl(
        &self,
        id: i64,
        update: UpdateStudentStatusRequest,
    ) -> Result<Option<StudentStatusRecord>> {
        let Some(existing) = StudentStatus::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let effective = update.effective_date.unwrap_or(existing.effective_date);
        let end = match update.end_date {
            Some(end) => end,
            None => existing.end_date,
        };
        check_period(effective, end)?;

        let mut model: ActiveModel = existing.into();
        if let Some(status_type) = update.status_type {
            model.status_type = Set(status_type.to_string());
        }
        model.effective_date = Set(effective);
        model.end_date = Set(end);
        if update.reason.is_some() {
            model.reason = Set(normalize_reason(update.reason));
        }

        let record = model.update(&self.db).await?;
        Ok(Some(record.into_record()))
    }

    pub async fn delete_student_status_impl(&self, id: i64) -> Result<bool> {
        let result = StudentStatus::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_student_status_history_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentStatusRecord>> {
        ensure_student_exists(&self.db, student_id).await?;
        let records = StudentStatus::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::EffectiveDate)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;
        Ok(records.into_iter().map(|r| r.into_record()).collect())
    }

    pub async fn get_current_student_status_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<StudentStatusRecord>> {
        let today = chrono::Local::now().date_naive();
        let record = StudentStatus::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::EffectiveDate.lte(today))
            .order_by_desc(Column::EffectiveDate)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await?;
        Ok(record.map(|r| r.into_record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_period() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        assert!(check_period(d("2024-09-01"), None).is_ok());
        assert!(check_period(d("2024-09-01"), Some(d("2024-09-01"))).is_ok());
        assert!(check_period(d("2024-09-01"), Some(d("2024-08-31"))).is_err());
    }

    #[test]
    fn test_normalize_reason() {
        assert_eq!(normalize_reason(Some("  ".into())), None);
        assert_eq!(normalize_reason(Some(" 病休 ".into())).as_deref(), Some("病休"));
    }
}
