use actix_web::{HttpRequest, Result as ActixResult, http::StatusCode};
use std::sync::Arc;

use crate::models::{ErrorCode, auth::CurrentUser, students::entities::StudentDetail};
use crate::services::{current_user, envelope_error};
use crate::storage::Storage;

/// 当前用户绑定的学生档案
pub(crate) async fn own_student(
    storage: &Arc<dyn Storage>,
    principal: &CurrentUser,
) -> ActixResult<Option<StudentDetail>> {
    storage
        .get_student_by_user_id(principal.id())
        .await
        .map_err(|e| {
            envelope_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                &format!("查询学生档案失败: {e}"),
            )
        })
}

/// 持有任一权限，或访问的是本人的学生档案
pub(crate) async fn ensure_student_access(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    student_id: i64,
    permissions: &[&str],
) -> ActixResult<CurrentUser> {
    let principal = current_user(request)?;
    if principal.has_permission(permissions) {
        return Ok(principal);
    }
    match own_student(storage, &principal).await? {
        Some(own) if own.student.id == student_id => Ok(principal),
        _ => Err(envelope_error(
            StatusCode::FORBIDDEN,
            ErrorCode::Forbidden,
            "只能查看本人的学业信息",
        )),
    }
}
