use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::student_status::requests::{
    CreateStudentStatusRequest, StudentStatusListParams, UpdateStudentStatusRequest,
};
use crate::services::StudentStatusService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentStatusService 实例
static STUDENT_STATUS_SERVICE: Lazy<StudentStatusService> =
    Lazy::new(StudentStatusService::new_lazy);

pub async fn list_records(
    req: HttpRequest,
    query: web::Query<StudentStatusListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_STATUS_SERVICE
        .list_records(query.into_inner(), &req)
        .await
}

pub async fn create_record(
    req: HttpRequest,
    record: web::Json<CreateStudentStatusRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_STATUS_SERVICE
        .create_record(record.into_inner(), &req)
        .await
}

pub async fn get_record(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_STATUS_SERVICE.get_record(record_id.0, &req).await
}

pub async fn update_record(
    req: HttpRequest,
    record_id: SafeIDI64,
    update: web::Json<UpdateStudentStatusRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_STATUS_SERVICE
        .update_record(record_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_record(req: HttpRequest, record_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_STATUS_SERVICE.delete_record(record_id.0, &req).await
}

// 配置路由
pub fn configure_student_status_routes(cfg: &mut web::ServiceConfig) {
    let view = || {
        RequirePermission::any(&[
            codes::STUDENT_STATUS_VIEW,
            codes::STUDENT_STATUS_UPDATE,
            codes::STUDENT_STATUS_MANAGE,
        ])
    };
    let manage = || {
        RequirePermission::any(&[codes::STUDENT_STATUS_UPDATE, codes::STUDENT_STATUS_MANAGE])
    };

    cfg.service(
        web::scope("/api/student-status")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_records).wrap(view()))
                    .route(web::post().to(create_record).wrap(manage())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_record).wrap(view()))
                    .route(web::put().to(update_record).wrap(manage()))
                    .route(web::delete().to(delete_record).wrap(manage())),
            ),
    );
}
