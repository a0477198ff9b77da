pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::student_status::requests::{
    CreateStudentStatusRequest, StudentStatusListParams, UpdateStudentStatusRequest,
};

define_service!(StudentStatusService);

impl StudentStatusService {
    pub async fn list_records(
        &self,
        query: StudentStatusListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_records(self, query, request).await
    }

    pub async fn get_record(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_record(self, record_id, request).await
    }

    // 登记学籍异动，经办人为当前用户
    pub async fn create_record(
        &self,
        record: CreateStudentStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_record(self, record, request).await
    }

    pub async fn update_record(
        &self,
        record_id: i64,
        update: UpdateStudentStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_record(self, record_id, update, request).await
    }

    pub async fn delete_record(
        &self,
        record_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_record(self, record_id, request).await
    }
}
