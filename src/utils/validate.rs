//! Form validation shared by the auth, notice and consultation routes.
//! Every function returns the cleaned value so handlers store exactly what
//! was checked.

use crate::types::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_PROGRAM_LEN: usize = 50;
pub const MAX_MESSAGE_LEN: usize = 2000;

pub fn required(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

pub fn max_len(field: &str, value: String, max: usize) -> Result<String, AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

/// Trimmed, length-checked optional field. Blank becomes `None`.
pub fn optional(field: &str, raw: Option<&str>, max: usize) -> Result<Option<String>, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => max_len(field, v.to_string(), max).map(Some),
        None => Ok(None),
    }
}

pub fn display_name(raw: &str) -> Result<String, AppError> {
    max_len("name", required("name", raw)?, MAX_NAME_LEN)
}

/// Lowercased, trimmed email.
pub fn email(raw: &str) -> Result<String, AppError> {
    let value = required("email", raw)?.to_lowercase();
    if !is_valid_email(&value) {
        return Err(AppError::InvalidEmail);
    }
    Ok(value)
}

pub fn optional_email(raw: Option<&str>) -> Result<Option<String>, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => email(v).map(Some),
        None => Ok(None),
    }
}

/// Presence only; login must not leak the password policy.
pub fn password_present(raw: &str) -> Result<(), AppError> {
    if raw.is_empty() {
        return Err(AppError::Validation("password is required".into()));
    }
    Ok(())
}

pub fn new_password(password: &str, confirm: &str) -> Result<(), AppError> {
    password_present(password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::WeakPassword(MIN_PASSWORD_LEN));
    }
    if confirm.is_empty() {
        return Err(AppError::Validation("password confirmation is required".into()));
    }
    if password != confirm {
        return Err(AppError::Validation("passwords do not match".into()));
    }
    Ok(())
}

/// Korean domestic numbers carry 9 to 11 digits; a leading `+` allows the
/// country code on top.
pub fn phone(raw: &str) -> Result<String, AppError> {
    let value = required("phone", raw)?;
    let (international, rest) = match value.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, value.as_str()),
    };
    let shape_ok = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');
    let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
    let max_digits = if international { 13 } else { 11 };
    if !shape_ok || digits < 9 || digits > max_digits {
        return Err(AppError::Validation("invalid phone number".into()));
    }
    Ok(value)
}

fn is_valid_email(value: &str) -> bool {
    if value.len() > 254 || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| {
            !l.is_empty()
                && !l.starts_with('-')
                && !l.ends_with('-')
                && l.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        assert_eq!(email("  Parent@Example.COM ").unwrap(), "parent@example.com");
    }

    #[test]
    fn bad_emails() {
        for bad in ["plain", "a@b", "@example.com", "a@@example.com", "a b@example.com", "a@-x.com", "a@x..com"] {
            assert!(matches!(email(bad), Err(AppError::InvalidEmail)), "{bad}");
        }
        assert!(matches!(email("   "), Err(AppError::Validation(_))));
    }

    #[test]
    fn password_rules() {
        assert!(matches!(new_password("12345", "12345"), Err(AppError::WeakPassword(6))));
        assert!(matches!(new_password("", ""), Err(AppError::Validation(_))));
        assert!(matches!(new_password("123456", ""), Err(AppError::Validation(_))));
        assert!(matches!(new_password("123456", "1234567"), Err(AppError::Validation(_))));
        assert!(new_password("123456", "123456").is_ok());
        // counted in characters, not bytes
        assert!(matches!(new_password("비밀번호", "비밀번호"), Err(AppError::WeakPassword(_))));
    }

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert_eq!(display_name("  김리틀  ").unwrap(), "김리틀");
        assert!(display_name("").is_err());
        assert!(display_name(&"가".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(display_name(&"가".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn phone_numbers() {
        assert_eq!(phone(" 010-1234-5678 ").unwrap(), "010-1234-5678");
        assert!(phone("02 123 4567").is_ok());
        assert!(phone("+82 10-1234-5678").is_ok());
        assert!(phone("010-12").is_err());
        assert!(phone("010-1234-5678-9999").is_err());
        assert!(phone("010-abcd-5678").is_err());
        assert!(phone("").is_err());
    }

    #[test]
    fn optional_fields() {
        assert_eq!(optional("program", None, 10).unwrap(), None);
        assert_eq!(optional("program", Some("   "), 10).unwrap(), None);
        assert_eq!(optional("program", Some(" 기타 "), 10).unwrap(), Some("기타".to_string()));
        assert!(optional("program", Some("01234567890"), 10).is_err());
        assert_eq!(optional_email(Some("")).unwrap(), None);
        assert!(optional_email(Some("nope")).is_err());
    }
}
