use std::collections::HashSet;

use super::SeaOrmStorage;
use super::lookups::fetch_page;
use super::roles::replace_role_permissions;
use crate::entity::permissions::{ActiveModel, Column, Entity as Permissions};
use crate::entity::roles;
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    permissions::{
        catalog::{BuiltinRole, PermissionSpec},
        entities::Permission,
        requests::PermissionListParams,
        responses::PermissionListResponse,
    },
    roles::entities::Role,
};
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    pub async fn list_permissions_with_pagination_impl(
        &self,
        query: PermissionListParams,
    ) -> Result<PermissionListResponse> {
        let mut select = Permissions::find();

        if let Some(ref module) = query.module
            && !module.trim().is_empty()
        {
            select = select.filter(Column::Module.eq(module.trim()));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(
                &[Column::PermissionName, Column::PermissionCode],
                search,
            ));
        }

        let select = select.order_by_asc(Column::Module).order_by_asc(Column::Id);
        let (perms, pagination) = fetch_page(&self.db, select, &query.pagination).await?;
        Ok(PaginatedResponse {
            items: perms.into_iter().map(|p| p.into_permission()).collect(),
            pagination,
        })
    }

    pub async fn list_all_permissions_impl(&self) -> Result<Vec<Permission>> {
        let perms = Permissions::find()
            .order_by_asc(Column::Module)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询权限列表失败: {e}")))?;
        Ok(perms.into_iter().map(|p| p.into_permission()).collect())
    }

    /// 按目录补齐缺失的权限，已有记录不覆盖
    pub async fn ensure_permissions_impl(&self, catalog: &[PermissionSpec]) -> Result<u64> {
        let existing: HashSet<String> = Permissions::find()
            .select_only()
            .column(Column::PermissionCode)
            .into_tuple()
            .all(&self.db)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<ActiveModel> = catalog
            .iter()
            .filter(|spec| !existing.contains(spec.code))
            .map(|spec| ActiveModel {
                permission_name: Set(spec.name.to_string()),
                permission_code: Set(spec.code.to_string()),
                module: Set(spec.module.to_string()),
                description: Set(Some(spec.description.to_string())),
                status: Set(true),
                ..Default::default()
            })
            .collect();

        let inserted = missing.len() as u64;
        if inserted > 0 {
            Permissions::insert_many(missing)
                .exec_without_returning(&self.db)
                .await?;
            info!("已补齐 {} 个权限", inserted);
        }
        Ok(inserted)
    }

    /// 确保内置角色存在；首次创建时授予默认权限，之后不覆盖管理员的调整
    pub async fn ensure_builtin_role_impl(&self, builtin: &BuiltinRole) -> Result<Role> {
        if let Some(role) = roles::Entity::find()
            .filter(roles::Column::RoleCode.eq(builtin.code))
            .one(&self.db)
            .await?
        {
            return Ok(role.into_role());
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let role = roles::ActiveModel {
            role_name: Set(builtin.name.to_string()),
            role_code: Set(builtin.code.to_string()),
            description: Set(Some(builtin.description.to_string())),
            status: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut grant = Permissions::find();
        if let Some(codes) = builtin.permissions {
            grant = grant.filter(Column::PermissionCode.is_in(codes.iter().copied()));
        }
        let permission_ids: Vec<i64> = grant
            .select_only()
            .column(Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;
        replace_role_permissions(&txn, role.id, permission_ids).await?;

        txn.commit().await?;
        info!("已创建内置角色 {}", builtin.code);
        Ok(role.into_role())
    }
}
