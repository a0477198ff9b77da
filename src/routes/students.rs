use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, TranscriptParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::{SafeIDI64, SafeUserIdI64};

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(student.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &req).await
}

pub async fn get_student_by_user(
    req: HttpRequest,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student_by_user(user_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    update: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &req).await
}

pub async fn transcript(
    req: HttpRequest,
    student_id: SafeIDI64,
    query: web::Query<TranscriptParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .transcript(student_id.0, query.into_inner(), &req)
        .await
}

pub async fn gpa(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.gpa(student_id.0, &req).await
}

pub async fn status_history(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.status_history(student_id.0, &req).await
}

pub async fn current_status(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.current_status(student_id.0, &req).await
}

// 配置路由
//
// 成绩单、绩点与学籍接口只要求登录，本人或有权限者可查看，由服务层判断
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::STUDENT_VIEW, codes::STUDENT_MANAGE]);
    let create = || RequirePermission::any(&[codes::STUDENT_CREATE, codes::STUDENT_MANAGE]);
    let update = || RequirePermission::any(&[codes::STUDENT_EDIT, codes::STUDENT_MANAGE]);
    let delete = || RequirePermission::any(&[codes::STUDENT_DELETE, codes::STUDENT_MANAGE]);

    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_students).wrap(view()))
                    .route(web::post().to(create_student).wrap(create())),
            )
            .service(
                web::resource("/user/{user_id}")
                    .route(web::get().to(get_student_by_user).wrap(view())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_student).wrap(view()))
                    .route(web::put().to(update_student).wrap(update()))
                    .route(web::delete().to(delete_student).wrap(delete())),
            )
            .route("/{id}/transcript", web::get().to(transcript))
            .route("/{id}/gpa", web::get().to(gpa))
            .route("/{id}/status-history", web::get().to(status_history))
            .route("/{id}/current-status", web::get().to(current_status)),
    );
}
