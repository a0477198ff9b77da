use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::permissions::codes;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::COURSE_VIEW, codes::COURSE_MANAGE]);
    let create = || RequirePermission::any(&[codes::COURSE_CREATE, codes::COURSE_MANAGE]);
    let update = || {
        RequirePermission::any(&[codes::COURSE_UPDATE, codes::COURSE_EDIT, codes::COURSE_MANAGE])
    };
    let delete = || RequirePermission::any(&[codes::COURSE_DELETE, codes::COURSE_MANAGE]);

    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_courses).wrap(view()))
                    .route(web::post().to(create_course).wrap(create())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course).wrap(view()))
                    .route(web::put().to(update_course).wrap(update()))
                    .route(web::delete().to(delete_course).wrap(delete())),
            ),
    );
}
