use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::{bad_request, internal_error, storage_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_password_simple, validate_phone, validate_text, validate_username,
};

/// 用户基本字段校验，返回 (错误码, 消息)
pub(super) fn check_profile_fields(
    email: Option<&str>,
    real_name: Option<&str>,
    phone: Option<&str>,
) -> Result<(), (ErrorCode, String)> {
    if let Some(email) = email {
        validate_email(email).map_err(|m| (ErrorCode::UserEmailInvalid, m.to_string()))?;
    }
    if let Some(real_name) = real_name {
        validate_text("姓名", real_name, 1, 50).map_err(|m| (ErrorCode::ValidationFailed, m))?;
    }
    if let Some(phone) = phone.filter(|p| !p.is_empty()) {
        validate_phone(phone).map_err(|m| (ErrorCode::UserPhoneInvalid, m.to_string()))?;
    }
    Ok(())
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    user_data.username = user_data.username.trim().to_string();
    user_data.email = user_data.email.trim().to_string();

    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }
    if let Err((code, msg)) = check_profile_fields(
        Some(&user_data.email),
        Some(&user_data.real_name),
        user_data.phone.as_deref(),
    ) {
        return Ok(bad_request(code, msg));
    }
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(bad_request(ErrorCode::UserPasswordInvalid, msg));
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("密码哈希失败", e)),
    };

    let storage = service.get_storage(request)?;
    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("创建用户 {} ({})", user.username, user.id);
            let created = storage.get_user_with_roles(user.id).await.ok().flatten();
            match created {
                Some(with_roles) => Ok(HttpResponse::Created()
                    .json(ApiResponse::success(with_roles, "用户创建成功"))),
                None => Ok(HttpResponse::Created().json(ApiResponse::success(user, "用户创建成功"))),
            }
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::RoleNotFound,
            ErrorCode::UserAlreadyExists,
            "创建用户失败",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_profile_fields() {
        assert!(check_profile_fields(Some("a@school.edu"), Some("张三"), None).is_ok());
        assert!(check_profile_fields(None, None, Some("")).is_ok());
        assert_eq!(
            check_profile_fields(Some("bad"), None, None).unwrap_err().0,
            ErrorCode::UserEmailInvalid
        );
        assert_eq!(
            check_profile_fields(None, None, Some("123")).unwrap_err().0,
            ErrorCode::UserPhoneInvalid
        );
        assert_eq!(
            check_profile_fields(None, Some("  "), None).unwrap_err().0,
            ErrorCode::ValidationFailed
        );
    }
}
