pub mod access;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};

define_service!(TeacherService);

impl TeacherService {
    pub async fn list_teachers(
        &self,
        query: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, query, request).await
    }

    pub async fn get_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_teacher(self, teacher_id, request).await
    }

    // 按用户ID查询教师档案
    pub async fn get_teacher_by_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_teacher_by_user(self, user_id, request).await
    }

    pub async fn create_teacher(
        &self,
        teacher: CreateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_teacher(self, teacher, request).await
    }

    pub async fn update_teacher(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_teacher(self, teacher_id, update, request).await
    }

    pub async fn delete_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_teacher(self, teacher_id, request).await
    }
}
