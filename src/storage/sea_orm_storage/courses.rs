use super::SeaOrmStorage;
use super::lookups::fetch_page;
use super::teachers::ensure_department_exists;
use crate::entity::course_offerings;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    courses::{
        entities::Course,
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        ensure_department_exists(&self.db, req.dept_id).await?;

        let now = chrono::Utc::now().timestamp();
        let course = ActiveModel {
            course_code: Set(req.course_code),
            course_name: Set(req.course_name),
            dept_id: Set(req.dept_id),
            credits: Set(req.credits),
            hours: Set(req.hours),
            course_type: Set(req.course_type.to_string()),
            description: Set(req.description),
            status: Set(req.status.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(course.into_course())
    }

    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课程失败: {e}")))?;
        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListParams,
    ) -> Result<CourseListResponse> {
        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(&[Column::CourseCode, Column::CourseName], search));
        }
        if let Some(dept_id) = query.dept_id {
            select = select.filter(Column::DeptId.eq(dept_id));
        }
        if let Some(course_type) = query.course_type {
            select = select.filter(Column::CourseType.eq(course_type.to_string()));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        let (courses, pagination) = fetch_page(
            &self.db,
            select.order_by_asc(Column::CourseCode),
            &query.pagination,
        )
        .await?;
        Ok(PaginatedResponse {
            items: courses.into_iter().map(|c| c.into_course()).collect(),
            pagination,
        })
    }

    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        ensure_department_exists(&self.db, update.dept_id).await?;

        let mut model: ActiveModel = existing.into();
        if let Some(code) = update.course_code {
            model.course_code = Set(code);
        }
        if let Some(name) = update.course_name {
            model.course_name = Set(name);
        }
        if let Some(dept_id) = update.dept_id {
            model.dept_id = Set(Some(dept_id));
        }
        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }
        if let Some(hours) = update.hours {
            model.hours = Set(hours);
        }
        if let Some(course_type) = update.course_type {
            model.course_type = Set(course_type.to_string());
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(Some(model.update(&self.db).await?.into_course()))
    }

    /// 删除课程；仍有开课时拒绝
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let offerings = course_offerings::Entity::find()
            .filter(course_offerings::Column::CourseId.eq(id))
            .count(&txn)
            .await?;
        if offerings > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "该课程仍有 {offerings} 个开课记录"
            )));
        }

        let result = Courses::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
