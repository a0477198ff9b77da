use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::models::schedules::requests::{
    ConflictCheckRequest, CreateScheduleRequest, GridViewParams, MyScheduleParams,
    ScheduleListParams, UpdateScheduleRequest,
};
use crate::services::ScheduleService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 ScheduleService 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

pub async fn list_schedules(
    req: HttpRequest,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.list_schedules(query.into_inner(), &req).await
}

pub async fn my_schedule(
    req: HttpRequest,
    query: web::Query<MyScheduleParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.my_schedule(query.into_inner(), &req).await
}

pub async fn grid_view(
    req: HttpRequest,
    query: web::Query<GridViewParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.grid_view(query.into_inner(), &req).await
}

pub async fn student_schedule(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<MyScheduleParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .student_schedule(student_id.0, query.into_inner(), &req)
        .await
}

pub async fn check_conflicts(
    req: HttpRequest,
    check: web::Json<ConflictCheckRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .check_conflicts(check.into_inner(), &req)
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    schedule: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(schedule.into_inner(), &req)
        .await
}

pub async fn get_schedule(req: HttpRequest, schedule_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.get_schedule(schedule_id.0, &req).await
}

pub async fn update_schedule(
    req: HttpRequest,
    schedule_id: SafeIDI64,
    update: web::Json<UpdateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule(schedule_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_schedule(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule(schedule_id.0, &req).await
}

// 配置路由
//
// 个人课表只要求登录，按学生或教师身份返回
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::SCHEDULE_VIEW, codes::SCHEDULE_MANAGE]);
    let create = || RequirePermission::any(&[codes::SCHEDULE_CREATE, codes::SCHEDULE_MANAGE]);
    let update = || {
        RequirePermission::any(&[
            codes::SCHEDULE_UPDATE,
            codes::SCHEDULE_EDIT,
            codes::SCHEDULE_MANAGE,
        ])
    };
    let delete = || RequirePermission::any(&[codes::SCHEDULE_DELETE, codes::SCHEDULE_MANAGE]);

    cfg.service(
        web::scope("/api/schedules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_schedules).wrap(view()))
                    .route(web::post().to(create_schedule).wrap(create())),
            )
            .route("/my-schedule", web::get().to(my_schedule))
            .service(web::resource("/grid-view").route(web::get().to(grid_view).wrap(view())))
            .service(
                web::resource("/by-student/{student_id}")
                    .route(web::get().to(student_schedule).wrap(view())),
            )
            .service(
                web::resource("/conflicts").route(web::post().to(check_conflicts).wrap(
                    RequirePermission::any(&[
                        codes::SCHEDULE_VIEW,
                        codes::SCHEDULE_MANAGE,
                        codes::SCHEDULE_CREATE,
                    ]),
                )),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_schedule).wrap(view()))
                    .route(web::put().to(update_schedule).wrap(update()))
                    .route(web::delete().to(delete_schedule).wrap(delete())),
            ),
    );
}
