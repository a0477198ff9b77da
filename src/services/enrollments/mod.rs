pub mod create;
pub mod list;
pub mod review;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SchoolSystemError;
use crate::models::ErrorCode;
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListParams, RejectEnrollmentRequest,
};
use crate::services::{reference_error, storage_error};

define_service!(EnrollmentService);

impl EnrollmentService {
    pub async fn list_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    // 当前学生的选课记录
    pub async fn my_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::my_enrollments(self, query, request).await
    }

    pub async fn create_enrollment(
        &self,
        enrollment: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, enrollment, request).await
    }

    // 退课
    pub async fn withdraw_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::withdraw_enrollment(self, enrollment_id, request).await
    }

    pub async fn approve_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        review::approve_enrollment(self, enrollment_id, request).await
    }

    pub async fn reject_enrollment(
        &self,
        enrollment_id: i64,
        reject: RejectEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        review::reject_enrollment(self, enrollment_id, reject, request).await
    }
}

/// 选课业务冲突按原因细分错误码
pub(crate) fn enrollment_error(err: SchoolSystemError, context: &str) -> HttpResponse {
    const REFERENCES: &[(&str, ErrorCode)] = &[
        ("学生", ErrorCode::StudentNotFound),
        ("开课", ErrorCode::OfferingNotFound),
        ("选课记录", ErrorCode::EnrollmentNotFound),
    ];

    let conflict_code = match &err {
        SchoolSystemError::Conflict(msg) if msg.contains("名额") => ErrorCode::EnrollmentFull,
        SchoolSystemError::Conflict(msg) if msg.contains("未开放") => ErrorCode::OfferingClosed,
        SchoolSystemError::Conflict(msg) if msg.contains("已选过") => {
            ErrorCode::EnrollmentDuplicate
        }
        SchoolSystemError::Conflict(_) => ErrorCode::EnrollmentInvalidState,
        _ => return reference_error(err, REFERENCES, ErrorCode::Conflict, context),
    };
    storage_error(err, ErrorCode::NotFound, conflict_code, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn code_of(resp: HttpResponse) -> i64 {
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["code"].as_i64().unwrap()
    }

    #[actix_web::test]
    async fn test_enrollment_error_codes() {
        let cases = [
            (SchoolSystemError::conflict("开课名额已满"), ErrorCode::EnrollmentFull),
            (SchoolSystemError::conflict("该开课未开放选课"), ErrorCode::OfferingClosed),
            (SchoolSystemError::conflict("已选过该课程"), ErrorCode::EnrollmentDuplicate),
            (
                SchoolSystemError::conflict("当前状态 rejected 不能退课"),
                ErrorCode::EnrollmentInvalidState,
            ),
            (
                SchoolSystemError::not_found("选课记录 9 不存在"),
                ErrorCode::EnrollmentNotFound,
            ),
        ];
        for (err, expected) in cases {
            let resp = enrollment_error(err, "测试");
            assert_eq!(code_of(resp).await, expected as i64);
        }
    }
}
