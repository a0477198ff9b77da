use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::course_offerings::requests::{
    CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest,
};
use crate::models::permissions::codes;
use crate::services::OfferingService;
use crate::utils::SafeIDI64;

// 懒加载的全局 OfferingService 实例
static OFFERING_SERVICE: Lazy<OfferingService> = Lazy::new(OfferingService::new_lazy);

pub async fn list_offerings(
    req: HttpRequest,
    query: web::Query<OfferingListParams>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.list_offerings(query.into_inner(), &req).await
}

pub async fn list_semesters(req: HttpRequest) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.list_semesters(&req).await
}

pub async fn my_courses(
    req: HttpRequest,
    query: web::Query<OfferingListParams>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.my_courses(query.into_inner(), &req).await
}

pub async fn create_offering(
    req: HttpRequest,
    offering: web::Json<CreateOfferingRequest>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .create_offering(offering.into_inner(), &req)
        .await
}

pub async fn get_offering(req: HttpRequest, offering_id: SafeIDI64) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.get_offering(offering_id.0, &req).await
}

pub async fn update_offering(
    req: HttpRequest,
    offering_id: SafeIDI64,
    update: web::Json<UpdateOfferingRequest>,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE
        .update_offering(offering_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_offering(
    req: HttpRequest,
    offering_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.delete_offering(offering_id.0, &req).await
}

pub async fn roster(req: HttpRequest, offering_id: SafeIDI64) -> ActixResult<HttpResponse> {
    OFFERING_SERVICE.roster(offering_id.0, &req).await
}

// 配置路由
pub fn configure_offering_routes(cfg: &mut web::ServiceConfig) {
    // 学生选课时也需要浏览开课
    let view = || {
        RequirePermission::any(&[
            codes::COURSE_OFFERING_VIEW,
            codes::COURSE_OFFERING_MANAGE,
            codes::ENROLLMENT_CREATE,
        ])
    };
    let create = || {
        RequirePermission::any(&[codes::COURSE_OFFERING_CREATE, codes::COURSE_OFFERING_MANAGE])
    };
    let update = || {
        RequirePermission::any(&[
            codes::COURSE_OFFERING_UPDATE,
            codes::COURSE_OFFERING_EDIT,
            codes::COURSE_OFFERING_MANAGE,
        ])
    };
    let delete = || {
        RequirePermission::any(&[codes::COURSE_OFFERING_DELETE, codes::COURSE_OFFERING_MANAGE])
    };

    cfg.service(
        web::scope("/api/course-offerings")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_offerings).wrap(view()))
                    .route(web::post().to(create_offering).wrap(create())),
            )
            .service(web::resource("/semesters").route(web::get().to(list_semesters).wrap(view())))
            .service(
                web::resource("/my-courses").route(web::get().to(my_courses).wrap(
                    RequirePermission::any(&[codes::MY_COURSES_VIEW, codes::COURSE_OFFERING_VIEW]),
                )),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_offering).wrap(view()))
                    .route(web::put().to(update_offering).wrap(update()))
                    .route(web::delete().to(delete_offering).wrap(delete())),
            )
            .service(
                web::resource("/{id}/enrollments").route(web::get().to(roster).wrap(
                    RequirePermission::any(&[
                        codes::ENROLLMENT_VIEW,
                        codes::ENROLLMENT_MANAGE,
                        codes::STUDENT_LIST_VIEW,
                    ]),
                )),
            ),
    );
}
