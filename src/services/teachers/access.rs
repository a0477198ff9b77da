use actix_web::{Result as ActixResult, http::StatusCode};
use std::sync::Arc;

use crate::models::{ErrorCode, auth::CurrentUser, teachers::entities::TeacherDetail};
use crate::services::envelope_error;
use crate::storage::Storage;

/// 当前用户绑定的教师档案
pub(crate) async fn own_teacher(
    storage: &Arc<dyn Storage>,
    principal: &CurrentUser,
) -> ActixResult<Option<TeacherDetail>> {
    storage
        .get_teacher_by_user_id(principal.id())
        .await
        .map_err(|e| {
            envelope_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalServerError,
                &format!("查询教师档案失败: {e}"),
            )
        })
}

/// 持有任一权限，或开课由当前教师讲授
pub(crate) async fn ensure_offering_owner(
    storage: &Arc<dyn Storage>,
    principal: &CurrentUser,
    offering_teacher_id: i64,
    permissions: &[&str],
) -> ActixResult<()> {
    if principal.has_permission(permissions) {
        return Ok(());
    }
    match own_teacher(storage, principal).await? {
        Some(own) if own.teacher.id == offering_teacher_id => Ok(()),
        _ => Err(envelope_error(
            StatusCode::FORBIDDEN,
            ErrorCode::Forbidden,
            "只能操作本人讲授的开课",
        )),
    }
}
