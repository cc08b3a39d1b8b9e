//! Input validation for the lookup operations.

use crate::error::{LookupError, Result};

/// A result-count cap, guaranteed to lie in `[Limit::MIN, Limit::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(u8);

impl Limit {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    /// Default for per-company listings.
    pub const COMPANY_DEFAULT: Limit = Limit(10);
    /// Default for the cross-company latest feed.
    pub const LATEST_DEFAULT: Limit = Limit(20);

    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(LookupError::Validation(format!(
                "limit must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u8))
    }

    /// Validate an optional caller-supplied limit, using `default` when absent.
    pub fn resolve(value: Option<i64>, default: Limit) -> Result<Self> {
        value.map_or(Ok(default), Self::new)
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

/// Parse a comma-separated company id list such as `"1, 2,3"`.
///
/// Absent or blank input means "no filter". Every token must be an integer;
/// an empty token between commas is rejected.
pub fn parse_company_ids(raw: Option<&str>) -> Result<Option<Vec<i64>>> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| {
                LookupError::Validation(format!("invalid company id '{token}' in company_ids"))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
