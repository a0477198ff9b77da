pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::classrooms::requests::{
    AvailableClassroomParams, ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};

define_service!(ClassroomService);

impl ClassroomService {
    pub async fn list_classrooms(
        &self,
        query: ClassroomListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, query, request).await
    }

    pub async fn list_all_classrooms(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_all_classrooms(self, request).await
    }

    // 指定时段空闲的教室
    pub async fn list_available(
        &self,
        query: AvailableClassroomParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_available(self, query, request).await
    }

    pub async fn get_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_classroom(self, classroom_id, request).await
    }

    pub async fn create_classroom(
        &self,
        classroom: CreateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_classroom(self, classroom, request).await
    }

    pub async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_classroom(self, classroom_id, update, request).await
    }

    pub async fn delete_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_classroom(self, classroom_id, request).await
    }
}
