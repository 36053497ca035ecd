//! Offset-based pagination utilities.

use thiserror::Error;

/// Error type for pagination parameter parsing.
#[derive(Debug, Error)]
pub enum PageParamsError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// A resolved limit/offset pair for a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

/// Resolves raw `num_items`/`offset` query values into page parameters.
///
/// Pagination only applies when *both* values are present; if either is
/// absent the caller gets `None` and the full result set is returned.
/// Present values must parse as non-negative 64-bit integers.
pub fn resolve(
    num_items: Option<&str>,
    offset: Option<&str>,
) -> Result<Option<PageParams>, PageParamsError> {
    let (num_items, offset) = match (num_items, offset) {
        (Some(n), Some(o)) => (n, o),
        _ => return Ok(None),
    };

    let limit = parse_non_negative("num_items", num_items)?;
    let offset = parse_non_negative("offset", offset)?;

    Ok(Some(PageParams { limit, offset }))
}

fn parse_non_negative(name: &'static str, value: &str) -> Result<i64, PageParamsError> {
    value
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .ok_or_else(|| PageParamsError::InvalidValue {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_both_present() {
        let page = resolve(Some("10"), Some("0")).unwrap();
        assert_eq!(
            page,
            Some(PageParams {
                limit: 10,
                offset: 0
            })
        );
    }

    #[test]
    fn test_resolve_num_items_missing() {
        let page = resolve(None, Some("0")).unwrap();
        assert_eq!(page, None);
    }

    #[test]
    fn test_resolve_offset_missing() {
        let page = resolve(Some("10"), None).unwrap();
        assert_eq!(page, None);
    }

    #[test]
    fn test_resolve_both_missing() {
        let page = resolve(None, None).unwrap();
        assert_eq!(page, None);
    }

    #[test]
    fn test_resolve_non_numeric_num_items() {
        let err = resolve(Some("ten"), Some("0")).unwrap_err();
        assert!(err.to_string().contains("num_items"));
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_resolve_non_numeric_offset() {
        let err = resolve(Some("10"), Some("later")).unwrap_err();
        assert!(err.to_string().contains("offset"));
    }

    #[test]
    fn test_resolve_negative_rejected() {
        assert!(resolve(Some("-1"), Some("0")).is_err());
        assert!(resolve(Some("10"), Some("-5")).is_err());
    }

    #[test]
    fn test_resolve_rejects_sql_fragment() {
        let err = resolve(Some("10; DROP TABLE phone"), Some("0")).unwrap_err();
        assert!(matches!(err, PageParamsError::InvalidValue { .. }));
    }

    #[test]
    fn test_resolve_overflow_rejected() {
        assert!(resolve(Some("99999999999999999999"), Some("0")).is_err());
    }

    #[test]
    fn test_resolve_zero_limit_allowed() {
        let page = resolve(Some("0"), Some("0")).unwrap();
        assert_eq!(
            page,
            Some(PageParams {
                limit: 0,
                offset: 0
            })
        );
    }
}
