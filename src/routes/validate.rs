use crate::error::AppError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const DEFAULT_RECORDS_PER_PAGE: u64 = 10;

/// Trims `value` and rejects it when empty.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{field} is required")));
    }
    Ok(trimmed)
}

pub fn bounded_name<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = required(field, value)?;
    let chars = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(AppError::bad_request(format!(
            "{field} must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(trimmed)
}

pub fn optional_required<'a>(
    field: &str,
    value: Option<&'a str>,
) -> Result<Option<&'a str>, AppError> {
    value.map(|value| required(field, value)).transpose()
}

pub fn email(value: &str) -> Result<String, AppError> {
    let trimmed = required("email", value)?;
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid || trimmed.chars().any(char::is_whitespace) {
        return Err(AppError::bad_request("email is not a valid address"));
    }
    Ok(trimmed.to_ascii_lowercase())
}

/// Digits with an optional leading `+`; spaces and dashes are dropped.
pub fn phone(value: &str) -> Result<String, AppError> {
    let trimmed = required("phone", value)?;
    let (prefix, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", trimmed),
    };
    let digits: String = rest.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if digits.len() < 7 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::bad_request("phone is not a valid number"));
    }
    Ok(format!("{prefix}{digits}"))
}

pub fn password(value: &str) -> Result<&str, AppError> {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Err(AppError::bad_request(format!(
            "password must be at least {PASSWORD_MIN_CHARS} characters"
        )));
    }
    Ok(value)
}

pub fn price(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::bad_request(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

pub fn non_negative(field: &str, value: i32) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::bad_request(format!("{field} must not be negative")));
    }
    Ok(value)
}

/// Offset and limit from the `recordPerPage`, `page` and `startIndex` query
/// values. Unparseable or out-of-range values fall back to the defaults.
pub fn page_window(
    record_per_page: Option<&str>,
    page: Option<&str>,
    start_index: Option<&str>,
) -> (u64, u64) {
    let limit = parse_at_least(record_per_page, 1).unwrap_or(DEFAULT_RECORDS_PER_PAGE);
    let page = parse_at_least(page, 1).unwrap_or(1);
    let offset = parse_at_least(start_index, 0).unwrap_or((page - 1).saturating_mul(limit));
    (offset, limit)
}

fn parse_at_least(value: Option<&str>, min: u64) -> Option<u64> {
    value
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed >= min as i64)
        .map(|parsed| parsed as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert_eq!(bounded_name("name", "  Pho ").ok(), Some("Pho"));
        assert!(bounded_name("name", "P").is_err());
        assert!(bounded_name("name", &"x".repeat(101)).is_err());
        assert!(bounded_name("name", "   ").is_err());
    }

    #[test]
    fn emails_and_phones_are_normalized() {
        assert_eq!(email(" Ada@Example.com ").ok().as_deref(), Some("ada@example.com"));
        assert!(email("ada.example.com").is_err());
        assert!(email("ada@localhost").is_err());
        assert!(email("a da@example.com").is_err());

        assert_eq!(phone("+1 555-0100-22").ok().as_deref(), Some("+1555010022"));
        assert!(phone("12345").is_err());
        assert!(phone("555-CALL-NOW").is_err());
    }

    #[test]
    fn password_has_a_minimum_length() {
        assert!(password("12345").is_err());
        assert!(password("123456").is_ok());
    }

    #[test]
    fn prices_must_be_finite_and_non_negative() {
        assert!(price("price", 0.0).is_ok());
        assert!(price("price", -0.01).is_err());
        assert!(price("price", f64::NAN).is_err());
    }

    #[test]
    fn page_window_falls_back_on_bad_input() {
        assert_eq!(page_window(None, None, None), (0, 10));
        assert_eq!(page_window(Some("5"), Some("3"), None), (10, 5));
        assert_eq!(page_window(Some("0"), Some("-2"), None), (0, 10));
        assert_eq!(page_window(Some("abc"), Some("2"), None), (10, 10));
        assert_eq!(page_window(Some("5"), Some("3"), Some("1")), (1, 5));
        assert_eq!(page_window(Some("5"), Some("3"), Some("-1")), (10, 5));
    }
}
