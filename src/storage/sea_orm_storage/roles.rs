use super::SeaOrmStorage;
use super::lookups::fetch_page;
use crate::entity::roles::{ActiveModel, Column, Entity as Roles};
use crate::entity::{permissions, role_permissions, user_roles};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    permissions::entities::Permission,
    roles::{
        entities::{PROTECTED_ROLES, Role, RoleDetail},
        requests::{CreateRoleRequest, RoleListParams, UpdateRoleRequest},
        responses::RoleListResponse,
    },
};
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// 整体替换角色权限，权限必须全部存在
pub(super) async fn replace_role_permissions<C: ConnectionTrait>(
    db: &C,
    role_id: i64,
    mut permission_ids: Vec<i64>,
) -> Result<()> {
    permission_ids.sort_unstable();
    permission_ids.dedup();

    if !permission_ids.is_empty() {
        let found = permissions::Entity::find()
            .filter(permissions::Column::Id.is_in(permission_ids.clone()))
            .count(db)
            .await?;
        if found as usize != permission_ids.len() {
            return Err(SchoolSystemError::not_found("部分权限不存在"));
        }
    }

    role_permissions::Entity::delete_many()
        .filter(role_permissions::Column::RoleId.eq(role_id))
        .exec(db)
        .await?;

    if !permission_ids.is_empty() {
        let links = permission_ids
            .into_iter()
            .map(|permission_id| role_permissions::ActiveModel {
                role_id: Set(role_id),
                permission_id: Set(permission_id),
            });
        role_permissions::Entity::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }
    Ok(())
}

async fn permissions_of_role<C: ConnectionTrait>(db: &C, role_id: i64) -> Result<Vec<Permission>> {
    let ids: Vec<i64> = role_permissions::Entity::find()
        .select_only()
        .column(role_permissions::Column::PermissionId)
        .filter(role_permissions::Column::RoleId.eq(role_id))
        .into_tuple()
        .all(db)
        .await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let perms = permissions::Entity::find()
        .filter(permissions::Column::Id.is_in(ids))
        .order_by_asc(permissions::Column::Id)
        .all(db)
        .await?;
    Ok(perms.into_iter().map(|p| p.into_permission()).collect())
}

impl SeaOrmStorage {
    pub async fn create_role_impl(&self, req: CreateRoleRequest) -> Result<Role> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let role = ActiveModel {
            role_name: Set(req.role_name),
            role_code: Set(req.role_code),
            description: Set(req.description),
            status: Set(req.status.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        replace_role_permissions(&txn, role.id, req.permission_ids).await?;

        txn.commit().await?;
        Ok(role.into_role())
    }

    pub async fn get_role_by_id_impl(&self, id: i64) -> Result<Option<Role>> {
        let result = Roles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询角色失败: {e}")))?;
        Ok(result.map(|m| m.into_role()))
    }

    pub async fn get_role_by_code_impl(&self, code: &str) -> Result<Option<Role>> {
        let result = Roles::find()
            .filter(Column::RoleCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询角色失败: {e}")))?;
        Ok(result.map(|m| m.into_role()))
    }

    /// 角色详情：权限列表与持有人数
    pub async fn get_role_detail_impl(&self, id: i64) -> Result<Option<RoleDetail>> {
        let Some(role) = Roles::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let permissions = permissions_of_role(&self.db, id).await?;
        let user_count = user_roles::Entity::find()
            .filter(user_roles::Column::RoleId.eq(id))
            .count(&self.db)
            .await?;

        Ok(Some(RoleDetail {
            role: role.into_role(),
            permissions,
            user_count,
        }))
    }

    pub async fn list_roles_with_pagination_impl(
        &self,
        query: RoleListParams,
    ) -> Result<RoleListResponse> {
        let mut select = Roles::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(&[Column::RoleName, Column::RoleCode], search));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status));
        }

        let (roles, pagination) =
            fetch_page(&self.db, select.order_by_asc(Column::Id), &query.pagination).await?;
        Ok(PaginatedResponse {
            items: roles.into_iter().map(|r| r.into_role()).collect(),
            pagination,
        })
    }

    pub async fn list_all_roles_impl(&self) -> Result<Vec<Role>> {
        let roles = Roles::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询角色列表失败: {e}")))?;
        Ok(roles.into_iter().map(|r| r.into_role()).collect())
    }

    pub async fn update_role_impl(
        &self,
        id: i64,
        update: UpdateRoleRequest,
    ) -> Result<Option<Role>> {
        let Some(existing) = Roles::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.role_name {
            model.role_name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = update.status {
            model.status = Set(status);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        Ok(Some(model.update(&self.db).await?.into_role()))
    }

    /// 删除角色；内置超级管理员或仍被用户持有时拒绝
    pub async fn delete_role_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;
        let Some(role) = Roles::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };
        if PROTECTED_ROLES.contains(&role.role_code.as_str()) {
            return Err(SchoolSystemError::conflict(format!(
                "内置角色 {} 不可删除",
                role.role_code
            )));
        }

        let holders = user_roles::Entity::find()
            .filter(user_roles::Column::RoleId.eq(id))
            .count(&txn)
            .await?;
        if holders > 0 {
            return Err(SchoolSystemError::conflict(format!(
                "仍有 {holders} 个用户持有该角色"
            )));
        }

        let result = Roles::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn get_role_permissions_impl(&self, role_id: i64) -> Result<Vec<Permission>> {
        permissions_of_role(&self.db, role_id).await
    }

    pub async fn set_role_permissions_impl(
        &self,
        role_id: i64,
        permission_ids: Vec<i64>,
    ) -> Result<()> {
        let txn = self.db.begin().await?;
        if Roles::find_by_id(role_id).one(&txn).await?.is_none() {
            return Err(SchoolSystemError::not_found(format!("角色 {role_id} 不存在")));
        }
        replace_role_permissions(&txn, role_id, permission_ids).await?;
        txn.commit().await?;
        Ok(())
    }
}
