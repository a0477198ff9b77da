use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RewardPunishmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    permissions::codes,
    reward_punishments::requests::{RewardPunishmentListParams, RewardPunishmentStatisticsParams},
};
use crate::services::students::access::ensure_student_access;
use crate::services::{bad_request, internal_error, not_found, storage_error};

pub async fn list_records(
    service: &RewardPunishmentService,
    query: RewardPunishmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let (Some(start), Some(end)) = (query.start_date, query.end_date)
        && end < start
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, "结束日期不能早于开始日期"));
    }
    let storage = service.get_storage(request)?;

    match storage.list_reward_punishments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取奖惩列表成功"))),
        Err(e) => Ok(internal_error("获取奖惩列表失败", e)),
    }
}

pub async fn get_record(
    service: &RewardPunishmentService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_reward_punishment_detail(record_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "获取奖惩记录成功"))),
        Ok(None) => Ok(not_found(ErrorCode::RewardPunishmentNotFound, "奖惩记录不存在")),
        Err(e) => Ok(internal_error("获取奖惩记录失败", e)),
    }
}

/// 学生本人也可查看自己的奖惩
pub async fn student_records(
    service: &RewardPunishmentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    ensure_student_access(
        &storage,
        request,
        student_id,
        &[codes::REWARD_PUNISHMENT_VIEW, codes::REWARD_PUNISHMENT_MANAGE],
    )
    .await?;

    match storage.get_student_detail(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "学生不存在")),
        Err(e) => return Ok(internal_error("获取学生奖惩失败", e)),
    }

    match storage.list_student_reward_punishments(student_id).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "获取学生奖惩成功"))),
        Err(e) => Ok(internal_error("获取学生奖惩失败", e)),
    }
}

pub async fn statistics(
    service: &RewardPunishmentService,
    query: RewardPunishmentStatisticsParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.reward_punishment_statistics(query.student_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "获取奖惩统计成功"))),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::StudentNotFound,
            ErrorCode::Conflict,
            "获取奖惩统计失败",
        )),
    }
}

/// 已使用过的奖惩类别，供前端筛选下拉
pub async fn list_categories(
    service: &RewardPunishmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_reward_punishment_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(ApiResponse::success(categories, "获取奖惩类别成功"))),
        Err(e) => Ok(internal_error("获取奖惩类别失败", e)),
    }
}
