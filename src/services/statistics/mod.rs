pub mod dashboard;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

define_service!(StatisticsService);

impl StatisticsService {
    // 全局统计
    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::overview(self, request).await
    }

    // 按身份返回的仪表盘数据
    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, request).await
    }
}
