use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";
const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

// JWT Claims；权限不放进 token，由中间件按用户实时加载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 用户 ID
    pub username: String,   // 用户名，仅用于日志
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, jsonwebtoken::errors::Error> {
        self.sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    /// access token 有效期（秒）
    pub fn access_token_ttl() -> i64 {
        AppConfig::get().jwt.access_token_expiry * 60
    }

    pub fn generate_access_token(
        user_id: i64,
        username: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            user_id,
            username,
            ACCESS,
            chrono::Duration::seconds(Self::access_token_ttl()),
        )
    }

    /// 勾选“记住我”时使用更长的有效期
    pub fn generate_refresh_token(
        user_id: i64,
        username: &str,
        remember_me: bool,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::generate_token_with_expiry(
            user_id,
            username,
            REFRESH,
            chrono::Duration::days(Self::refresh_token_days(remember_me)),
        )
    }

    pub fn refresh_token_days(remember_me: bool) -> i64 {
        let jwt = &AppConfig::get().jwt;
        if remember_me {
            jwt.refresh_token_remember_me_expiry
        } else {
            jwt.refresh_token_expiry
        }
    }

    pub fn generate_token_with_expiry(
        user_id: i64,
        username: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type: token_type.to_string(),
            exp: (now + expiry_duration).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(Self::secret().as_bytes()),
        )
    }

    pub fn generate_token_pair(
        user_id: i64,
        username: &str,
        remember_me: bool,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, username)?,
            refresh_token: Self::generate_refresh_token(user_id, username, remember_me)?,
        })
    }

    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(Self::secret().as_bytes());
        decode::<Claims>(token, &decoding_key, &Validation::default()).map(|data| data.claims)
    }

    fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, ACCESS)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, REFRESH)
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(refresh_token: &str, remember_me: bool) -> Cookie<'static> {
        Cookie::build(REFRESH_TOKEN_COOKIE, refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                Self::refresh_token_days(remember_me),
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    /// 立即过期的空 Cookie（用于注销）
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build(REFRESH_TOKEN_COOKIE, "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    /// 从 `Authorization: Bearer <token>` 中取出 token
    pub fn extract_bearer_token(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_types() {
        let pair = JwtUtils::generate_token_pair(42, "alice", false).unwrap();
        let access = JwtUtils::verify_access_token(&pair.access_token).unwrap();
        assert_eq!(access.user_id().unwrap(), 42);
        assert_eq!(access.username, "alice");
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token =
            JwtUtils::generate_token_with_expiry(1, "bob", "access", chrono::Duration::hours(-2))
                .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_logout_cookie_is_expired() {
        let cookie = JwtUtils::create_empty_refresh_token_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(JwtUtils::extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(JwtUtils::extract_bearer_token("Bearer "), None);
        assert_eq!(JwtUtils::extract_bearer_token("Basic abc"), None);
    }
}
