pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};

define_service!(CourseService);

impl CourseService {
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_course(self, course_id, request).await
    }

    pub async fn create_course(
        &self,
        course: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_course(self, course, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_course(self, course_id, update, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_course(self, course_id, request).await
    }
}
