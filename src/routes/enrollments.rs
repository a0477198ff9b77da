use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListParams, RejectEnrollmentRequest,
};
use crate::models::permissions::codes;
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

pub async fn my_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .my_enrollments(query.into_inner(), &req)
        .await
}

pub async fn create_enrollment(
    req: HttpRequest,
    enrollment: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(enrollment.into_inner(), &req)
        .await
}

pub async fn withdraw_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .withdraw_enrollment(enrollment_id.0, &req)
        .await
}

pub async fn approve_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .approve_enrollment(enrollment_id.0, &req)
        .await
}

pub async fn reject_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
    reject: web::Json<RejectEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .reject_enrollment(enrollment_id.0, reject.into_inner(), &req)
        .await
}

// 配置路由
//
// 退课只要求登录，学生只能退自己的选课，由服务层判断
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    let review = || RequirePermission::any(&[codes::ENROLLMENT_APPROVE, codes::ENROLLMENT_MANAGE]);

    cfg.service(
        web::scope("/api/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_enrollments).wrap(RequirePermission::any(&[
                        codes::ENROLLMENT_VIEW,
                        codes::ENROLLMENT_MANAGE,
                    ])))
                    .route(web::post().to(create_enrollment).wrap(RequirePermission::any(&[
                        codes::ENROLLMENT_CREATE,
                        codes::ENROLLMENT_MANAGE,
                    ]))),
            )
            .service(
                web::resource("/my-enrollments").route(web::get().to(my_enrollments).wrap(
                    RequirePermission::any(&[codes::MY_ENROLLMENT_VIEW, codes::ENROLLMENT_CREATE]),
                )),
            )
            .route("/{id}", web::delete().to(withdraw_enrollment))
            .service(
                web::resource("/{id}/approve")
                    .route(web::post().to(approve_enrollment).wrap(review())),
            )
            .service(
                web::resource("/{id}/reject").route(web::post().to(reject_enrollment).wrap(review())),
            ),
    );
}
