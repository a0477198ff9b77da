//! 路径参数提取器
//!
//! 解析失败时直接返回 400 与统一响应体，而不是 actix 默认的纯文本错误。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 解析为正整数 ID
pub(crate) fn parse_positive_id(raw: &str, label: &str) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("无效的{label}: {raw}")),
    }
}

macro_rules! define_id_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                ready(parse_positive_id(raw, $label).map($name).map_err(bad_path))
            }
        }
    };
}

define_id_extractor!(
    /// 通用 `{id}` 路径参数
    SafeIDI64,
    "id",
    "ID"
);
define_id_extractor!(SafeUserIdI64, "user_id", "用户ID");
define_id_extractor!(SafeStudentIdI64, "student_id", "学生ID");
define_id_extractor!(SafeOfferingIdI64, "offering_id", "开课ID");
define_id_extractor!(SafeEnrollmentIdI64, "enrollment_id", "选课ID");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42", "ID"), Ok(42));
        assert!(parse_positive_id("0", "ID").is_err());
        assert!(parse_positive_id("-3", "ID").is_err());
        assert!(parse_positive_id("abc", "ID").is_err());
    }

    #[actix_web::test]
    async fn test_extract_from_match_info() {
        let req = TestRequest::default().param("id", "7").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 7);

        let req = TestRequest::default().param("student_id", "x").to_http_request();
        assert!(SafeStudentIdI64::extract(&req).await.is_err());
    }
}
