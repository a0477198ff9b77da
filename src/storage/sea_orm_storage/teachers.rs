use super::SeaOrmStorage;
use super::lookups::{fetch_page, teacher_details};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Relation};
use crate::entity::{course_offerings, departments, users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    teachers::{
        entities::{Teacher, TeacherDetail},
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::sql::contains_escaped;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

pub(super) async fn ensure_user_exists<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<()> {
    if users::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(SchoolSystemError::not_found(format!("用户 {user_id} 不存在")));
    }
    Ok(())
}

pub(super) async fn ensure_department_exists<C: ConnectionTrait>(
    db: &C,
    dept_id: Option<i64>,
) -> Result<()> {
    if let Some(dept_id) = dept_id
        && departments::Entity::find_by_id(dept_id).one(db).await?.is_none()
    {
        return Err(SchoolSystemError::not_found(format!("部门 {dept_id} 不存在")));
    }
    Ok(())
}

impl SeaOrmStorage {
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        ensure_user_exists(&self.db, req.user_id).await?;
        ensure_department_exists(&self.db, req.dept_id).await?;

        let now = chrono::Utc::now().timestamp();
        let teacher = ActiveModel {
            user_id: Set(req.user_id),
            teacher_no: Set(req.teacher_no),
            dept_id: Set(req.dept_id),
            title: Set(req.title),
            hire_date: Set(req.hire_date),
            status: Set(req.status.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(teacher.into_teacher())
    }

    pub async fn get_teacher_detail_impl(&self, id: i64) -> Result<Option<TeacherDetail>> {
        let Some(teacher) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师失败: {e}")))?
        else {
            return Ok(None);
        };
        Ok(teacher_details(&self.db, vec![teacher]).await?.pop())
    }

    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<TeacherDetail>> {
        let Some(teacher) = Teachers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(teacher_details(&self.db, vec![teacher]).await?.pop())
    }

    /// 分页列出教师，关键字匹配工号或姓名
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        let mut select = Teachers::find().join(JoinType::InnerJoin, Relation::User.def());

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(contains_escaped(Column::TeacherNo, search))
                    .add(contains_escaped(users::Column::RealName, search)),
            );
        }
        if let Some(dept_id) = query.dept_id {
            select = select.filter(Column::DeptId.eq(dept_id));
        }
        if let Some(ref title) = query.title
            && !title.trim().is_empty()
        {
            select = select.filter(Column::Title.eq(title.trim()));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        let (teachers, pagination) =
            fetch_page(&self.db, select.order_by_asc(Column::Id), &query.pagination).await?;
        Ok(PaginatedResponse {
            items: teacher_details(&self.db, teachers).await?,
            pagination,
        })
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let Some(existing) = Teachers::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        ensure_department_exists(&self.db, update.dept_id).await?;

        let mut model: ActiveModel = existing.into();
        if let Some(no) = update.teacher_no {
            model.teacher_no = Set(no);
        }
        if let Some(dept_id) = update.dept_id {
            model.dept_id = Set(Some(dept_id));
        }
        if let Some(title) = update.title {
            model.title = Set(Some(title));
        }
        if let Some(hire_date) = update.hire_date {
            model.hire_date = Set(Some(hire_date));
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(Some(model.update(&self.db).await?.into_teacher()))
    }

    /// 删除教师档案；仍有开课时拒绝
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let offerings = course_offerings::Entity::find()
            .filter(course_offerings::Column::TeacherId.eq(id))
            .count(&txn)
            .await?;
        if offerings > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "该教师仍有 {offerings} 个开课记录"
            )));
        }

        let result = Teachers::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
