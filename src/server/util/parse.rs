use std::cmp::Ordering;

use crate::server::error::AppError;

/// Validates an identifier taken from the request as a Discord snowflake.
///
/// Identifiers end up in upstream request paths, so anything that is not a plain
/// unsigned integer is rejected.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw value from the request
///
/// # Returns
/// - `Ok(String)` - The trimmed snowflake
/// - `Err(AppError::BadRequest)` - The value is not a valid snowflake
pub fn parse_snowflake(name: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    value
        .parse::<u64>()
        .map(|_| value.to_string())
        .map_err(|e| AppError::BadRequest(format!("Invalid {} '{}': {}", name, value, e)))
}

/// Validates an optional identifier, treating a blank value as absent.
pub fn parse_optional_snowflake(
    name: &str,
    value: Option<&str>,
) -> Result<Option<String>, AppError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_snowflake(name, value).map(Some),
        None => Ok(None),
    }
}

/// Orders two snowflakes numerically without parsing them.
///
/// Ids are decimal digit strings without leading zeros, so the shorter one is smaller
/// and ids of equal width compare as strings.
pub fn compare_snowflakes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Checks whether `id` was created before the `before` cursor.
pub fn is_older_than(id: &str, before: &str) -> bool {
    compare_snowflakes(id, before) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_snowflakes_of_unequal_width_numerically() {
        assert_eq!(compare_snowflakes("99", "100"), Ordering::Less);
        assert_eq!(
            compare_snowflakes("1200000000000000021", "1200000000000000020"),
            Ordering::Greater
        );
        assert!(is_older_than("20", "1200000000000000021"));
        assert!(!is_older_than("1200000000000000021", "1200000000000000021"));
    }

    #[test]
    fn accepts_numeric_ids() {
        assert_eq!(
            parse_snowflake("channelId", " 1234567890123456789 ").unwrap(),
            "1234567890123456789"
        );
    }

    #[test]
    fn rejects_path_like_ids() {
        let result = parse_snowflake("channelId", "123/../../users/@me");

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("channelId")));
    }

    #[test]
    fn blank_optional_ids_are_absent() {
        assert_eq!(parse_optional_snowflake("userId", Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_snowflake("userId", None).unwrap(), None);
    }
}
