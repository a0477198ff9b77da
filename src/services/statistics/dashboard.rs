use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatisticsService;
use crate::models::roles::entities::{STUDENT, TEACHER};
use crate::models::{ApiResponse, permissions::codes, statistics::responses::DashboardStatistics};
use crate::services::students::access::own_student;
use crate::services::teachers::access::own_teacher;
use crate::services::{current_user, internal_error};

pub async fn overview(
    service: &StatisticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.overview_statistics().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取统计数据成功"))),
        Err(e) => Ok(internal_error("获取统计数据失败", e)),
    }
}

/// 管理员看全局数据，其次按教师、学生角色及其档案判断身份
pub async fn dashboard(
    service: &StatisticsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = current_user(request)?;
    let storage = service.get_storage(request)?;

    let is_admin = principal.has_permission(&[codes::USER_VIEW, codes::SYSTEM_MANAGE]);
    let teacher = if !is_admin && principal.has_role(&[TEACHER]) {
        own_teacher(&storage, &principal).await?
    } else {
        None
    };
    let student = if !is_admin && teacher.is_none() && principal.has_role(&[STUDENT]) {
        own_student(&storage, &principal).await?
    } else {
        None
    };

    let result = if is_admin {
        storage
            .overview_statistics()
            .await
            .map(DashboardStatistics::Admin)
    } else if let Some(teacher) = teacher {
        storage.teacher_dashboard(teacher.teacher.id).await
    } else if let Some(student) = student {
        storage.student_dashboard(student.student.id).await
    } else {
        Ok(DashboardStatistics::Basic {
            username: principal.user.username.clone(),
        })
    };

    match result {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取仪表盘数据成功"))),
        Err(e) => Ok(internal_error("获取仪表盘数据失败", e)),
    }
}
