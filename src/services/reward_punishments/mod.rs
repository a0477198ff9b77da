pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::reward_punishments::requests::{
    CreateRewardPunishmentRequest, RewardPunishmentListParams, RewardPunishmentStatisticsParams,
    UpdateRewardPunishmentRequest,
};

define_service!(RewardPunishmentService);

impl RewardPunishmentService {
    pub async fn list_records(
        &self,
        query: RewardPunishmentListParams,
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

    // 某学生的全部奖惩
    pub async fn student_records(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::student_records(self, student_id, request).await
    }

    pub async fn statistics(
        &self,
        query: RewardPunishmentStatisticsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::statistics(self, query, request).await
    }

    pub async fn list_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_categories(self, request).await
    }

    pub async fn create_record(
        &self,
        record: CreateRewardPunishmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_record(self, record, request).await
    }

    pub async fn update_record(
        &self,
        record_id: i64,
        update: UpdateRewardPunishmentRequest,
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
