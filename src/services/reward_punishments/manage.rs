use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RewardPunishmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    reward_punishments::requests::{CreateRewardPunishmentRequest, UpdateRewardPunishmentRequest},
};
use crate::services::{bad_request, current_user, not_found, storage_error};
use crate::utils::validate::validate_text;

fn check_description(description: Option<&str>) -> Result<(), String> {
    match description {
        Some(text) if text.chars().count() > 1000 => {
            Err("描述长度不能超过 1000 个字符".to_string())
        }
        _ => Ok(()),
    }
}

pub async fn create_record(
    service: &RewardPunishmentService,
    record: CreateRewardPunishmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_text("类别", &record.category, 1, 50)
        .and_then(|_| check_description(record.description.as_deref()))
    {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }

    let handler = current_user(request)?;
    let storage = service.get_storage(request)?;
    match storage.create_reward_punishment(record, handler.id()).await {
        Ok(created) => {
            info!(
                "学生 {} 新增{}记录：{}",
                created.student_id, created.kind, created.category
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "奖惩记录创建成功")))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::StudentNotFound,
            ErrorCode::Conflict,
            "创建奖惩记录失败",
        )),
    }
}

pub async fn update_record(
    service: &RewardPunishmentService,
    record_id: i64,
    update: UpdateRewardPunishmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = check_description(update.description.as_deref()) {
        return Ok(bad_request(ErrorCode::ValidationFailed, msg));
    }
    let storage = service.get_storage(request)?;

    match storage.update_reward_punishment(record_id, update).await {
        Ok(Some(updated)) => Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "奖惩记录更新成功"))),
        Ok(None) => Ok(not_found(ErrorCode::RewardPunishmentNotFound, "奖惩记录不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RewardPunishmentNotFound,
            ErrorCode::Conflict,
            "更新奖惩记录失败",
        )),
    }
}

pub async fn delete_record(
    service: &RewardPunishmentService,
    record_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_reward_punishment(record_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("奖惩记录删除成功"))),
        Ok(false) => Ok(not_found(ErrorCode::RewardPunishmentNotFound, "奖惩记录不存在")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RewardPunishmentNotFound,
            ErrorCode::Conflict,
            "删除奖惩记录失败",
        )),
    }
}
