use rand::Rng;
use rand::distr::Alphanumeric;

/// 生成满足密码策略的初始密码（含大小写字母与数字）
pub fn generate_initial_password() -> String {
    let mut rng = rand::rng();
    loop {
        let candidate: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        if candidate.chars().any(|c| c.is_ascii_uppercase())
            && candidate.chars().any(|c| c.is_ascii_lowercase())
            && candidate.chars().any(|c| c.is_ascii_digit())
        {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_initial_password_length() {
        let password = generate_initial_password();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_initial_password_meets_policy() {
        for _ in 0..20 {
            assert!(validate_password(&generate_initial_password()).is_valid);
        }
    }
}
