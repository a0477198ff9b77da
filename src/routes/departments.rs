use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::departments::requests::{
    CreateDepartmentRequest, DepartmentListParams, UpdateDepartmentRequest,
};
use crate::models::permissions::codes;
use crate::services::DepartmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 DepartmentService 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

pub async fn list_departments(
    req: HttpRequest,
    query: web::Query<DepartmentListParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_departments(query.into_inner(), &req)
        .await
}

pub async fn list_all_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.list_all_departments(&req).await
}

pub async fn department_tree(req: HttpRequest) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.department_tree(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    dept: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(dept.into_inner(), &req)
        .await
}

pub async fn get_department(req: HttpRequest, dept_id: SafeIDI64) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.get_department(dept_id.0, &req).await
}

pub async fn update_department(
    req: HttpRequest,
    dept_id: SafeIDI64,
    update: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .update_department(dept_id.0, update.into_inner(), &req)
        .await
}

pub async fn delete_department(req: HttpRequest, dept_id: SafeIDI64) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.delete_department(dept_id.0, &req).await
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    let view = || RequirePermission::any(&[codes::DEPARTMENT_VIEW, codes::DEPARTMENT_MANAGE]);
    let create = || RequirePermission::any(&[codes::DEPARTMENT_CREATE, codes::DEPARTMENT_MANAGE]);
    let update = || RequirePermission::any(&[codes::DEPARTMENT_EDIT, codes::DEPARTMENT_MANAGE]);
    let delete = || RequirePermission::any(&[codes::DEPARTMENT_DELETE, codes::DEPARTMENT_MANAGE]);

    cfg.service(
        web::scope("/api/departments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_departments).wrap(view()))
                    .route(web::post().to(create_department).wrap(create())),
            )
            .service(
                web::resource("/all").route(web::get().to(list_all_departments).wrap(view())),
            )
            .service(web::resource("/tree").route(web::get().to(department_tree).wrap(view())))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_department).wrap(view()))
                    .route(web::put().to(update_department).wrap(update()))
                    .route(web::delete().to(delete_department).wrap(delete())),
            ),
    );
}
