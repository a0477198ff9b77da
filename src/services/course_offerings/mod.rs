pub mod list;
pub mod manage;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::course_offerings::requests::{
    CreateOfferingRequest, OfferingListParams, UpdateOfferingRequest,
};

define_service!(OfferingService);

impl OfferingService {
    pub async fn list_offerings(
        &self,
        query: OfferingListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_offerings(self, query, request).await
    }

    pub async fn get_offering(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::get_offering(self, offering_id, request).await
    }

    pub async fn list_semesters(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_semesters(self, request).await
    }

    // 当前教师讲授的开课
    pub async fn my_courses(
        &self,
        query: OfferingListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::my_courses(self, query, request).await
    }

    pub async fn create_offering(
        &self,
        offering: CreateOfferingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_offering(self, offering, request).await
    }

    pub async fn update_offering(
        &self,
        offering_id: i64,
        update: UpdateOfferingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_offering(self, offering_id, update, request).await
    }

    pub async fn delete_offering(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_offering(self, offering_id, request).await
    }

    // 选课名单
    pub async fn roster(
        &self,
        offering_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::roster(self, offering_id, request).await
    }
}
