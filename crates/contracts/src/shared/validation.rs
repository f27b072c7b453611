//! Synchronous field checks used by every draft before anything is sent.
//!
//! Only presence and format are checked here. Uniqueness of identifiers and
//! referential integrity are the backend's job and come back as rejections.

use chrono::NaiveDate;
use thiserror::Error;

/// A draft field failed a presence or format check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending draft field (matches the form input id)
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn require_text(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    Ok(())
}

/// Identifier-like values: non-empty, no inner whitespace
pub fn require_identifier(
    field: &'static str,
    label: &str,
    value: &str,
) -> Result<(), ValidationError> {
    require_text(field, label, value)?;
    if value.trim().chars().any(char::is_whitespace) {
        return Err(ValidationError::new(
            field,
            format!("{label} must not contain spaces"),
        ));
    }
    Ok(())
}

pub fn parse_non_negative_amount(
    field: &'static str,
    label: &str,
    raw: &str,
) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, format!("{label} must be a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{label} must be zero or greater"),
        ));
    }
    Ok(value)
}

pub fn parse_count(field: &'static str, label: &str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse().map_err(|_| {
        ValidationError::new(field, format!("{label} must be a whole number (0 or more)"))
    })
}

/// Empty input means "not set"
pub fn parse_optional_count(
    field: &'static str,
    label: &str,
    raw: &str,
) -> Result<Option<u32>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_count(field, label, raw).map(Some)
}

pub fn parse_percent(field: &'static str, label: &str, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_non_negative_amount(field, label, raw)?;
    if value > 100.0 {
        return Err(ValidationError::new(
            field,
            format!("{label} must be between 0 and 100"),
        ));
    }
    Ok(value)
}

/// Dates come from `<input type="date">`, i.e. `YYYY-MM-DD`
pub fn parse_date(field: &'static str, label: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::new(field, format!("{label} must be a date (YYYY-MM-DD)")))
}

pub fn parse_optional_date(
    field: &'static str,
    label: &str,
    raw: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(field, label, raw).map(Some)
}

pub fn require_http_url(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    require_text(field, label, value)?;
    let value = value.trim();
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ValidationError::new(
            field,
            format!("{label} must start with http:// or https://"),
        ));
    }
    Ok(())
}

pub fn require_email(field: &'static str, label: &str, value: &str) -> Result<(), ValidationError> {
    require_text(field, label, value)?;
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid {
        return Err(ValidationError::new(
            field,
            format!("{label} is not a valid email address"),
        ));
    }
    Ok(())
}

/// Splits a comma separated id list typed into a single input
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("name", "Name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Name is required");
        assert!(require_text("name", "Name", "Ring").is_ok());
    }

    #[test]
    fn test_identifier_rejects_inner_spaces() {
        assert!(require_identifier("category_id", "Category ID", "RING-01").is_ok());
        assert!(require_identifier("category_id", "Category ID", " RING-01 ").is_ok());
        assert!(require_identifier("category_id", "Category ID", "RING 01").is_err());
    }

    #[test]
    fn test_amount_must_be_numeric_and_non_negative() {
        assert_eq!(parse_non_negative_amount("price", "Price", "0").unwrap(), 0.0);
        assert_eq!(parse_non_negative_amount("price", "Price", " 12.5 ").unwrap(), 12.5);
        assert!(parse_non_negative_amount("price", "Price", "-1").is_err());
        assert!(parse_non_negative_amount("price", "Price", "abc").is_err());
        assert!(parse_non_negative_amount("price", "Price", "NaN").is_err());
        assert!(parse_non_negative_amount("price", "Price", "").is_err());
    }

    #[test]
    fn test_percent_range() {
        assert_eq!(parse_percent("percent", "Percent", "100").unwrap(), 100.0);
        assert!(parse_percent("percent", "Percent", "100.5").is_err());
        assert!(parse_percent("percent", "Percent", "-3").is_err());
    }

    #[test]
    fn test_optional_values() {
        assert_eq!(parse_optional_count("max_uses", "Max uses", "").unwrap(), None);
        assert_eq!(parse_optional_count("max_uses", "Max uses", "7").unwrap(), Some(7));
        assert!(parse_optional_count("max_uses", "Max uses", "7.5").is_err());
        assert_eq!(parse_optional_date("expires_at", "Expiry", " ").unwrap(), None);
        assert_eq!(
            parse_optional_date("expires_at", "Expiry", "2025-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
        assert!(parse_optional_date("expires_at", "Expiry", "31/12/2025").is_err());
    }

    #[test]
    fn test_url_and_email() {
        assert!(require_http_url("link_url", "Link", "https://shop.example/sale").is_ok());
        assert!(require_http_url("link_url", "Link", "ftp://shop.example").is_err());
        assert!(require_email("email", "Email", "admin@shop.example").is_ok());
        assert!(require_email("email", "Email", "admin@shop").is_err());
        assert!(require_email("email", "Email", "@shop.example").is_err());
    }

    #[test]
    fn test_split_ids_drops_blanks() {
        assert_eq!(split_ids(" a, b,,c ,"), vec!["a", "b", "c"]);
        assert!(split_ids("").is_empty());
    }
}
