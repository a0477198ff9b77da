use crate::config::AppConfig;
use crate::errors::SchoolSystemError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码（Argon2id，参数来自配置）
pub fn hash_password(password: &str) -> Result<String, SchoolSystemError> {
    let config = &AppConfig::get().argon2;
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| SchoolSystemError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SchoolSystemError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码；哈希中自带参数，因此修改配置不影响旧密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Secret123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Secret123", &hash));
        assert!(!verify_password("secret123", &hash));
        assert!(!verify_password("Secret123", "not-a-hash"));
    }
}
