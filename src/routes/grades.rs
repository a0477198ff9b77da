use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::grades::requests::{BatchGradeRequest, GradeListParams, RecordGradeRequest};
use crate::models::permissions::codes;
use crate::models::students::requests::TranscriptParams;
use crate::services::GradeService;
use crate::utils::{SafeEnrollmentIdI64, SafeOfferingIdI64};

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn my_grades(
    req: HttpRequest,
    query: web::Query<TranscriptParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.my_grades(query.into_inner(), &req).await
}

pub async fn offering_grades(
    req: HttpRequest,
    offering_id: SafeOfferingIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.offering_grades(offering_id.0, &req).await
}

pub async fn record_grade(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
    scores: web::Json<RecordGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .record_grade(enrollment_id.0, scores.into_inner(), &req)
        .await
}

pub async fn batch_update(
    req: HttpRequest,
    batch: web::Json<BatchGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.batch_update(batch.into_inner(), &req).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    let input = || {
        RequirePermission::any(&[
            codes::GRADE_INPUT,
            codes::GRADE_UPDATE,
            codes::GRADE_EDIT,
            codes::GRADE_MANAGE,
        ])
    };

    cfg.service(
        web::scope("/api/grades")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_grades).wrap(
                RequirePermission::any(&[codes::GRADE_VIEW, codes::GRADE_MANAGE]),
            )))
            .service(
                web::resource("/my-grades").route(web::get().to(my_grades).wrap(
                    RequirePermission::any(&[codes::MY_GRADE_VIEW, codes::GRADE_VIEW]),
                )),
            )
            .service(web::resource("/batch-update").route(web::post().to(batch_update).wrap(input())))
            .service(
                web::resource("/course-offerings/{offering_id}").route(
                    web::get().to(offering_grades).wrap(RequirePermission::any(&[
                        codes::GRADE_VIEW,
                        codes::GRADE_MANAGE,
                        codes::GRADE_INPUT,
                    ])),
                ),
            )
            .service(web::resource("/{enrollment_id}").route(web::put().to(record_grade).wrap(input()))),
    );
}
