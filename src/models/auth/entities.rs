use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::roles::entities::SUPER_ADMIN;
use crate::models::users::entities::User;

/// 当前请求的认证主体
///
/// 由 RequireJWT 中间件构建并放入请求扩展，按 access token 缓存。
/// roles/permissions 只包含启用状态的角色及其启用的权限。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: User,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
}

impl CurrentUser {
    pub fn new(
        user: User,
        roles: impl IntoIterator<Item = String>,
        permissions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            user,
            roles: roles.into_iter().collect(),
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn id(&self) -> i64 {
        self.user.id
    }

    /// 超级管理员角色或内置 admin 账号，跳过所有权限检查
    pub fn is_super_admin(&self) -> bool {
        self.roles.contains(SUPER_ADMIN) || self.user.is_builtin_admin()
    }

    /// 任一权限即可
    pub fn has_permission(&self, codes: &[&str]) -> bool {
        self.is_super_admin() || codes.iter().any(|code| self.permissions.contains(*code))
    }

    /// 需要全部权限
    pub fn has_all_permissions(&self, codes: &[&str]) -> bool {
        self.is_super_admin() || codes.iter().all(|code| self.permissions.contains(*code))
    }

    /// 任一角色即可
    pub fn has_role(&self, role_codes: &[&str]) -> bool {
        self.is_super_admin() || role_codes.iter().any(|code| self.roles.contains(*code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::permissions::codes;
    use crate::models::users::entities::UserStatus;

    fn user(username: &str) -> User {
        let now = chrono::Utc::now();
        User {
            id: 7,
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            password_hash: String::new(),
            real_name: "测试".to_string(),
            phone: None,
            status: UserStatus::Active,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn principal(username: &str, roles: &[&str], perms: &[&str]) -> CurrentUser {
        CurrentUser::new(
            user(username),
            roles.iter().map(|r| r.to_string()),
            perms.iter().map(|p| p.to_string()),
        )
    }

    #[test]
    fn test_any_of_permission() {
        let u = principal("teacher01", &["TEACHER"], &[codes::GRADE_INPUT]);
        assert!(u.has_permission(&[codes::GRADE_MANAGE, codes::GRADE_INPUT]));
        assert!(!u.has_permission(&[codes::USER_MANAGE]));
        assert!(!u.has_permission(&[]));
    }

    #[test]
    fn test_every_of_permission_and_roles() {
        let u = principal(
            "dean",
            &["ACADEMIC_ADMIN"],
            &[codes::USER_UPDATE, codes::ROLE_VIEW],
        );
        assert!(u.has_all_permissions(&[codes::USER_UPDATE, codes::ROLE_VIEW]));
        assert!(!u.has_all_permissions(&[codes::USER_UPDATE, codes::ROLE_UPDATE]));
        assert!(u.has_all_permissions(&[]));
        assert!(u.has_role(&["TEACHER", "ACADEMIC_ADMIN"]));
        assert!(!u.has_role(&["STUDENT"]));
    }

    #[test]
    fn test_super_admin_bypass() {
        let by_role = principal("someone", &[SUPER_ADMIN], &[]);
        assert!(by_role.has_permission(&[codes::SYSTEM_MANAGE]));
        assert!(by_role.has_all_permissions(&[codes::USER_DELETE, codes::ROLE_DELETE]));
        assert!(by_role.has_role(&["STUDENT"]));

        let by_name = principal("admin", &[], &[]);
        assert!(by_name.is_super_admin());
        assert!(by_name.has_permission(&[codes::USER_DELETE]));
    }
}
