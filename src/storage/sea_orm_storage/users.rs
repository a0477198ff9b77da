use std::collections::HashMap;

use super::SeaOrmStorage;
use super::lookups::fetch_page;
use crate::entity::{
    course_offerings, enrollments, role_permissions, roles, students, teachers, user_roles,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse,
    roles::entities::RoleBrief,
    users::{
        entities::{User, UserStatus, UserWithRoles},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::UserAuthorities;
use crate::utils::sql::any_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// 批量查询用户角色（含停用角色）
async fn role_briefs_for<C: ConnectionTrait>(
    db: &C,
    user_ids: &[i64],
) -> Result<HashMap<i64, Vec<RoleBrief>>> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let links = user_roles::Entity::find()
        .filter(user_roles::Column::UserId.is_in(user_ids.iter().copied()))
        .all(db)
        .await?;
    let role_map: HashMap<i64, roles::Model> = roles::Entity::find()
        .filter(roles::Column::Id.is_in(links.iter().map(|l| l.role_id)))
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let mut result: HashMap<i64, Vec<RoleBrief>> = HashMap::new();
    for link in links {
        if let Some(role) = role_map.get(&link.role_id) {
            result.entry(link.user_id).or_default().push(RoleBrief {
                id: role.id,
                role_name: role.role_name.clone(),
                role_code: role.role_code.clone(),
            });
        }
    }
    for briefs in result.values_mut() {
        briefs.sort_by_key(|b| b.id);
    }
    Ok(result)
}

/// 整体替换用户角色，角色必须全部存在
async fn replace_user_roles<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    mut role_ids: Vec<i64>,
) -> Result<()> {
    role_ids.sort_unstable();
    role_ids.dedup();

    if !role_ids.is_empty() {
        let found = roles::Entity::find()
            .filter(roles::Column::Id.is_in(role_ids.clone()))
            .count(db)
            .await?;
        if found as usize != role_ids.len() {
            return Err(SchoolSystemError::not_found("部分角色不存在"));
        }
    }

    user_roles::Entity::delete_many()
        .filter(user_roles::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    if !role_ids.is_empty() {
        let links = role_ids.into_iter().map(|role_id| user_roles::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        });
        user_roles::Entity::insert_many(links)
            .exec_without_returning(db)
            .await?;
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 创建用户并分配角色
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            real_name: Set(req.real_name),
            phone: Set(req.phone),
            status: Set(req.status.unwrap_or(UserStatus::Active).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let user = model.insert(&txn).await?;
        replace_user_roles(&txn, user.id, req.role_ids).await?;

        txn.commit().await?;
        Ok(user.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_with_roles_impl(&self, id: i64) -> Result<Option<UserWithRoles>> {
        let Some(user) = Users::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut roles = role_briefs_for(&self.db, &[id]).await?;
        Ok(Some(UserWithRoles {
            user: user.into_user(),
            roles: roles.remove(&id).unwrap_or_default(),
        }))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(any_contains(
                &[Column::Username, Column::Email, Column::RealName],
                search,
            ));
        }

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 角色筛选
        if let Some(role_id) = query.role_id {
            let user_ids: Vec<i64> = user_roles::Entity::find()
                .select_only()
                .column(user_roles::Column::UserId)
                .filter(user_roles::Column::RoleId.eq(role_id))
                .into_tuple()
                .all(&self.db)
                .await?;
            select = select.filter(Column::Id.is_in(user_ids));
        }

        let select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);
        let (users, pagination) = fetch_page(&self.db, select, &query.pagination)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        let mut roles = role_briefs_for(&self.db, &ids).await?;

        Ok(PaginatedResponse {
            items: users
                .into_iter()
                .map(|u| UserWithRoles {
                    roles: roles.remove(&u.id).unwrap_or_default(),
                    user: u.into_user(),
                })
                .collect(),
            pagination,
        })
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Users::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(real_name) = update.real_name {
            model.real_name = Set(real_name);
        }
        if let Some(phone) = update.phone {
            model.phone = Set((!phone.is_empty()).then_some(phone));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let user = model.update(&txn).await?;
        if let Some(role_ids) = update.role_ids {
            replace_user_roles(&txn, id, role_ids).await?;
        }

        txn.commit().await?;
        Ok(Some(user.into_user()))
    }

    /// 删除用户；学生档案仍有选课、教师档案仍有开课时拒绝，
    /// 否则档案与角色随外键级联删除
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        if let Some(student) = students::Entity::find()
            .filter(students::Column::UserId.eq(id))
            .one(&txn)
            .await?
        {
            let enrolled = enrollments::Entity::find()
                .filter(enrollments::Column::StudentId.eq(student.id))
                .count(&txn)
                .await?;
            if enrolled > 0 {
                return Err(SchoolSystemError::conflict(format!(
                    "该用户的学生档案仍有 {enrolled} 条选课记录"
                )));
            }
        }

        if let Some(teacher) = teachers::Entity::find()
            .filter(teachers::Column::UserId.eq(id))
            .one(&txn)
            .await?
        {
            let offerings = course_offerings::Entity::find()
                .filter(course_offerings::Column::TeacherId.eq(teacher.id))
                .count(&txn)
                .await?;
            if offerings > 0 {
                return Err(SchoolSystemError::conflict(format!(
                    "该用户的教师档案仍有 {offerings} 个开课记录"
                )));
            }
        }

        let result = Users::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    /// 更新最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                Column::LastLogin,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Users::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_user_roles_impl(&self, user_id: i64, role_ids: Vec<i64>) -> Result<()> {
        let txn = self.db.begin().await?;
        if Users::find_by_id(user_id).one(&txn).await?.is_none() {
            return Err(SchoolSystemError::not_found(format!("用户 {user_id} 不存在")));
        }
        replace_user_roles(&txn, user_id, role_ids).await?;
        txn.commit().await?;
        Ok(())
    }

    /// 启用角色的编码与这些角色下启用权限的编码
    pub async fn get_user_authorities_impl(&self, user_id: i64) -> Result<UserAuthorities> {
        let role_ids: Vec<i64> = user_roles::Entity::find()
            .select_only()
            .column(user_roles::Column::RoleId)
            .filter(user_roles::Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await?;
        if role_ids.is_empty() {
            return Ok(UserAuthorities::default());
        }

        let enabled_roles = roles::Entity::find()
            .filter(roles::Column::Id.is_in(role_ids))
            .filter(roles::Column::Status.eq(true))
            .all(&self.db)
            .await?;
        let enabled_ids: Vec<i64> = enabled_roles.iter().map(|r| r.id).collect();

        let permission_ids: Vec<i64> = role_permissions::Entity::find()
            .select_only()
            .column(role_permissions::Column::PermissionId)
            .filter(role_permissions::Column::RoleId.is_in(enabled_ids))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut permissions: Vec<String> = if permission_ids.is_empty() {
            Vec::new()
        } else {
            crate::entity::permissions::Entity::find()
                .filter(crate::entity::permissions::Column::Id.is_in(permission_ids))
                .filter(crate::entity::permissions::Column::Status.eq(true))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|p| p.permission_code)
                .collect()
        };
        permissions.sort();

        Ok(UserAuthorities {
            roles: enabled_roles.into_iter().map(|r| r.role_code).collect(),
            permissions,
        })
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        Ok(Users::find().count(&self.db).await?)
    }
}
