//! JSON 与查询参数的反序列化错误处理

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn reject(message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, &message));
    InternalError::from_response(message, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON 参数错误 {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::ContentType => "请求体必须为 application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("请求体格式错误: {e}"),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "请求体过大".to_string()
        }
        other => format!("请求体解析失败: {other}"),
    };
    reject(message)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("查询参数错误 {}: {}", req.path(), err);
    reject(format!("查询参数错误: {err}"))
}
