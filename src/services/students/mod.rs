pub mod access;
pub mod academic;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, TranscriptParams, UpdateStudentRequest,
};

define_service!(StudentService);

impl StudentService {
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_student(self, student_id, request).await
    }

    pub async fn get_student_by_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_student_by_user(self, user_id, request).await
    }

    pub async fn create_student(
        &self,
        student: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_student(self, student, request).await
    }

    pub async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_student(self, student_id, update, request).await
    }

    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_student(self, student_id, request).await
    }

    // 成绩单
    pub async fn transcript(
        &self,
        student_id: i64,
        query: TranscriptParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        academic::transcript(self, student_id, query, request).await
    }

    pub async fn gpa(&self, student_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        academic::gpa(self, student_id, request).await
    }

    // 学籍异动历史
    pub async fn status_history(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        academic::status_history(self, student_id, request).await
    }

    pub async fn current_status(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        academic::current_status(self, student_id, request).await
    }
}
