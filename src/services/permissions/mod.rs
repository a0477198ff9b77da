pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::permissions::requests::PermissionListParams;

define_service!(PermissionService);

impl PermissionService {
    pub async fn list_permissions(
        &self,
        query: PermissionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_permissions(self, query, request).await
    }

    pub async fn list_all_permissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_all_permissions(self, request).await
    }

    pub async fn list_by_module(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_by_module(self, request).await
    }

    pub async fn list_modules(&self) -> ActixResult<HttpResponse> {
        list::list_modules().await
    }
}
