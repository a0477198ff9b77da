use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 中国大陆手机号
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("Invalid phone regex"));

// 编码类字段：学号、工号、课程代码、部门代码、教室号
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid code regex"));

// 角色代码：大写字母与下划线
static ROLE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Invalid role code regex"));

// 学期，例如 2024-2025-1
static SEMESTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}-[12]$").expect("Invalid semester regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("用户名长度必须在 3 到 32 个字符之间");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("用户名只能包含字母、数字、下划线或连字符");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("邮箱格式不正确");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !PHONE_RE.is_match(phone) {
        return Err("手机号格式不正确");
    }
    Ok(())
}

/// 编码字段校验，`min` 为最小长度
pub fn validate_code(field: &str, value: &str, min: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > 32 {
        return Err(format!("{field}长度必须在 {min} 到 32 个字符之间"));
    }
    if !CODE_RE.is_match(value) {
        return Err(format!("{field}只能包含字母、数字、下划线或连字符"));
    }
    Ok(())
}

pub fn validate_role_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 2 || code.len() > 50 || !ROLE_CODE_RE.is_match(code) {
        return Err("角色代码只能包含大写字母、数字和下划线，且以字母开头");
    }
    Ok(())
}

pub fn validate_semester(semester: &str) -> Result<(), &'static str> {
    if !SEMESTER_RE.is_match(semester) {
        return Err("学期格式应为 YYYY-YYYY-N，例如 2024-2025-1");
    }
    let start: i32 = semester[0..4].parse().map_err(|_| "学期年份无效")?;
    let end: i32 = semester[5..9].parse().map_err(|_| "学期年份无效")?;
    if end != start + 1 {
        return Err("学期的结束年份必须比开始年份大 1");
    }
    Ok(())
}

/// 必填文本，去除首尾空白后长度在 [min, max] 之间
pub fn validate_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(format!("{field}长度必须在 {min} 到 {max} 个字符之间"));
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("密码长度至少为 8 个字符");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("密码必须包含大写字母");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("密码必须包含小写字母");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("密码必须包含数字");
    }

    let weak_passwords = [
        "password1",
        "qwerty123",
        "admin123",
        "abcd1234",
        "admin12345",
        "school123",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("密码过于常见，请使用更安全的密码");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Ab1").errors.contains(&"密码长度至少为 8 个字符"));
        assert!(validate_password("abcd12345").errors.contains(&"密码必须包含大写字母"));
        assert!(validate_password("ABCD12345").errors.contains(&"密码必须包含小写字母"));
        assert!(validate_password("AbcdEfgh").errors.contains(&"密码必须包含数字"));
        assert!(
            validate_password("Password1")
                .errors
                .contains(&"密码过于常见，请使用更安全的密码")
        );
    }

    #[test]
    fn test_username() {
        assert!(validate_username("t001").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_email_and_phone() {
        assert!(validate_email("zhang@school.edu.cn").is_ok());
        assert!(validate_email("zhang@school").is_err());
        assert!(validate_phone("13800138000").is_ok());
        assert!(validate_phone("12800138000").is_err());
        assert!(validate_phone("1380013800").is_err());
    }

    #[test]
    fn test_codes() {
        assert!(validate_code("课程代码", "CS101", 3).is_ok());
        assert!(validate_code("课程代码", "C1", 3).is_err());
        assert!(validate_code("课程代码", "CS 101", 3).is_err());
        assert!(validate_role_code("ACADEMIC_ADMIN").is_ok());
        assert!(validate_role_code("teacher").is_err());
    }

    #[test]
    fn test_semester() {
        assert!(validate_semester("2024-2025-1").is_ok());
        assert!(validate_semester("2024-2025-3").is_err());
        assert!(validate_semester("2024-2026-1").is_err());
        assert!(validate_semester("24-25-1").is_err());
    }
}
