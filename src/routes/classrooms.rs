use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::classrooms::requests::{
    AvailableClassroomParams, ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::models::permissions::codes;
use crate::services::ClassroomService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ClassroomService 实例
static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomListParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classrooms(query.into_inner(), &req)
        .await
}

pub async fn list_all_classrooms(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.list_all_classrooms(&req).await
}

pub async fn list_available(
    req: HttpRequest,
    query: web::Query<AvailableClassroomParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_available(query.into_inner(), &req)
        .await
}

pub async fn create_classroom(
    req: HttpRequest,
    classroom: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .create_classroom(classroom.into_inner(), &req)
        .await
}

pub async fn get_classroom(req: HttpRequest, classroom_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(classroom_id.0, &req).await
}

pub async fn update_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    update: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(classroom_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.delete_classroom(classroom_id.0, &req).await
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    // 排课时需要查看教室
    let view = || {
        RequirePermission::any(&[
            codes::CLASSROOM_VIEW,
            codes::CLASSROOM_MANAGE,
            codes::SCHEDULE_VIEW,
            codes::SCHEDULE_MANAGE,
        ])
    };
    let manage = || RequirePermission::any(&[codes::CLASSROOM_MANAGE]);

    cfg.service(
        web::scope("/api/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classrooms).wrap(view()))
                    .route(web::post().to(create_classroom).wrap(manage())),
            )
            .service(web::resource("/all").route(web::get().to(list_all_classrooms).wrap(view())))
            .service(web::resource("/available").route(web::get().to(list_available).wrap(view())))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_classroom).wrap(view()))
                    .route(web::put().to(update_classroom).wrap(manage()))
                    .route(web::delete().to(delete_classroom).wrap(manage())),
            ),
    );
}
