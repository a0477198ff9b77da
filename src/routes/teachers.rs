use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::services::TeacherService;
use crate::utils::{SafeIDI64, SafeUserIdI64};

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(query.into_inner(), &req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(teacher.into_inner(), &req).await
}

pub async fn get_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(teacher_id.0, &req).await
}

pub async fn get_teacher_by_user(
    req: HttpRequest,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher_by_user(user_id.0, &req).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(teacher_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(teacher_id.0, &req).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::TEACHER_VIEW, codes::TEACHER_MANAGE]);
    let create = || RequirePermission::any(&[codes::TEACHER_CREATE, codes::TEACHER_MANAGE]);
    let update = || RequirePermission::any(&[codes::TEACHER_EDIT, codes::TEACHER_MANAGE]);
    let delete = || RequirePermission::any(&[codes::TEACHER_DELETE, codes::TEACHER_MANAGE]);

    cfg.service(
        web::scope("/api/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers).wrap(view()))
                    .route(web::post().to(create_teacher).wrap(create())),
            )
            .service(
                web::resource("/user/{user_id}")
                    .route(web::get().to(get_teacher_by_user).wrap(view())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_teacher).wrap(view()))
                    .route(web::put().to(update_teacher).wrap(update()))
                    .route(web::delete().to(delete_teacher).wrap(delete())),
            ),
    );
}
