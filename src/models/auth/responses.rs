use std::collections::BTreeSet;

use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;
use crate::models::users::entities::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

// 当前用户资料：角色、权限以及绑定的教师/学生档案
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub roles: BTreeSet<String>,
    pub permissions: BTreeSet<String>,
    pub is_super_admin: bool,
    pub teacher: Option<Teacher>,
    pub student: Option<Student>,
}
