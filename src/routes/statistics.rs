use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission};
use crate::models::permissions::codes;
use crate::services::StatisticsService;

// 懒加载的全局 StatisticsService 实例
static STATISTICS_SERVICE: Lazy<StatisticsService> = Lazy::new(StatisticsService::new_lazy);

pub async fn overview(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE.overview(&req).await
}

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATISTICS_SERVICE.dashboard(&req).await
}

// 配置路由
pub fn configure_statistics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/statistics")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/overview").route(web::get().to(overview).wrap(
                RequirePermission::any(&[codes::USER_VIEW, codes::SYSTEM_MANAGE]),
            )))
            .route("/dashboard", web::get().to(dashboard)),
    );
}
