use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::reward_punishments::requests::{
    CreateRewardPunishmentRequest, RewardPunishmentListParams, RewardPunishmentStatisticsParams,
    UpdateRewardPunishmentRequest,
};
use crate::services::RewardPunishmentService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 RewardPunishmentService 实例
static REWARD_PUNISHMENT_SERVICE: Lazy<RewardPunishmentService> =
    Lazy::new(RewardPunishmentService::new_lazy);

pub async fn list_records(
    req: HttpRequest,
    query: web::Query<RewardPunishmentListParams>,
) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .list_records(query.into_inner(), &req)
        .await
}

pub async fn statistics(
    req: HttpRequest,
    query: web::Query<RewardPunishmentStatisticsParams>,
) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .statistics(query.into_inner(), &req)
        .await
}

pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE.list_categories(&req).await
}

pub async fn student_records(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .student_records(student_id.0, &req)
        .await
}

pub async fn create_record(
    req: HttpRequest,
    record: web::Json<CreateRewardPunishmentRequest>,
) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .create_record(record.into_inner(), &req)
        .await
}

pub async fn get_record(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE.get_record(record_id.0, &req).await
}

pub async fn update_record(
    req: HttpRequest,
    record_id: SafeIDI64,
    update: web::Json<UpdateRewardPunishmentRequest>,
) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .update_record(record_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_record(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REWARD_PUNISHMENT_SERVICE
        .delete_record(record_id.0, &req)
        .await
}

// 配置路由
//
// 学生个人奖惩只要求登录，本人或有权限者可查看
pub fn configure_reward_punishment_routes(cfg: &mut web::ServiceConfig) {
    let view = || {
        RequirePermission::any(&[codes::REWARD_PUNISHMENT_VIEW, codes::REWARD_PUNISHMENT_MANAGE])
    };
    let create = || {
        RequirePermission::any(&[codes::REWARD_PUNISHMENT_CREATE, codes::REWARD_PUNISHMENT_MANAGE])
    };
    let update = || {
        RequirePermission::any(&[codes::REWARD_PUNISHMENT_UPDATE, codes::REWARD_PUNISHMENT_MANAGE])
    };
    let delete = || {
        RequirePermission::any(&[codes::REWARD_PUNISHMENT_DELETE, codes::REWARD_PUNISHMENT_MANAGE])
    };

    cfg.service(
        web::scope("/api/reward-punishments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_records).wrap(view()))
                    .route(web::post().to(create_record).wrap(create())),
            )
            .service(web::resource("/statistics").route(web::get().to(statistics).wrap(view())))
            .service(
                web::resource("/categories/list").route(web::get().to(list_categories).wrap(view())),
            )
            .route("/student/{student_id}", web::get().to(student_records))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_record).wrap(view()))
                    .route(web::put().to(update_record).wrap(update()))
                    .route(web::delete().to(delete_record).wrap(delete())),
            ),
    );
}
