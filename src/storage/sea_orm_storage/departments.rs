use std::collections::HashMap;

use super::SeaOrmStorage;
use super::lookups::fetch_page;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::entity::{courses, students, teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest},
        responses::{DepartmentListResponse, DepartmentUsage},
    },
};
use crate::utils::department_tree::is_self_or_descendant;
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

async fn usage_of<C: ConnectionTrait>(db: &C, id: i64) -> Result<DepartmentUsage> {
    Ok(DepartmentUsage {
        children: Departments::find()
            .filter(Column::ParentId.eq(id))
            .count(db)
            .await?,
        teachers: teachers::Entity::find()
            .filter(teachers::Column::DeptId.eq(id))
            .count(db)
            .await?,
        students: students::Entity::find()
            .filter(students::Column::DeptId.eq(id))
            .count(db)
            .await?,
        courses: courses::Entity::find()
            .filter(courses::Column::DeptId.eq(id))
            .count(db)
            .await?,
    })
}

async fn ensure_parent_exists<C: ConnectionTrait>(db: &C, parent_id: i64) -> Result<()> {
    if Departments::find_by_id(parent_id).one(db).await?.is_none() {
        return Err(SchoolSystemError::not_found(format!(
            "上级部门 {parent_id} 不存在"
        )));
    }
    Ok(())
}

impl SeaOrmStorage {
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        if let Some(parent_id) = req.parent_id {
            ensure_parent_exists(&self.db, parent_id).await?;
        }

        let now = chrono::Utc::now().timestamp();
        let dept = ActiveModel {
            dept_name: Set(req.dept_name),
            dept_code: Set(req.dept_code),
            parent_id: Set(req.parent_id),
            description: Set(req.description),
            status: Set(req.status.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(dept.into_department())
    }

    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询部门失败: {e}")))?;
        Ok(result.map(|m| m.into_department()))
    }

    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListParams,
    ) -> Result<DepartmentListResponse> {
        let mut select = Departments::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(&[Column::DeptName, Column::DeptCode], search));
        }
        if let Some(parent_id) = query.parent_id {
            select = select.filter(Column::ParentId.eq(parent_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        let (depts, pagination) =
            fetch_page(&self.db, select.order_by_asc(Column::Id), &query.pagination).await?;
        Ok(PaginatedResponse {
            items: depts.into_iter().map(|d| d.into_department()).collect(),
            pagination,
        })
    }

    pub async fn list_all_departments_impl(&self) -> Result<Vec<Department>> {
        let depts = Departments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询部门列表失败: {e}")))?;
        Ok(depts.into_iter().map(|d| d.into_department()).collect())
    }

    /// 更新部门；上级不能是自身或自身的下级
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let txn = self.db.begin().await?;
        let Some(existing) = Departments::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(Some(parent_id)) = update.parent_id {
            ensure_parent_exists(&txn, parent_id).await?;
            let parents: HashMap<i64, Option<i64>> = Departments::find()
                .select_only()
                .column(Column::Id)
                .column(Column::ParentId)
                .into_tuple::<(i64, Option<i64>)>()
                .all(&txn)
                .await?
                .into_iter()
                .collect();
            if is_self_or_descendant(&parents, id, parent_id) {
                return Err(SchoolSystemError::validation(
                    "上级部门不能是部门自身或其下级部门",
                ));
            }
        }

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.dept_name {
            model.dept_name = Set(name);
        }
        if let Some(code) = update.dept_code {
            model.dept_code = Set(code);
        }
        if let Some(parent_id) = update.parent_id {
            model.parent_id = Set(parent_id);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let dept = model.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(dept.into_department()))
    }

    /// 删除部门；仍有下级部门、教师、学生或课程时拒绝
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        if Departments::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        let usage = usage_of(&txn, id).await?;
        if !usage.is_empty() {
            return Err(SchoolSystemError::conflict(format!(
                "部门仍被引用：下级部门 {}，教师 {}，学生 {}，课程 {}",
                usage.children, usage.teachers, usage.students, usage.courses
            )));
        }

        let result = Departments::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
