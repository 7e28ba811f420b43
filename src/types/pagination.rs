//! Skip/limit parameters for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::config::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_SKIP, MAX_LIST_LIMIT};

/// List query parameters
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of users to skip, at most `MAX_LIST_SKIP`
    #[serde(default = "default_skip")]
    #[validate(range(max = 9_223_372_036_854_775_807u64, message = "skip is too large"))]
    pub skip: u64,
    /// Maximum number of users to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_LIST_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl ListParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_LIST_LIMIT)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_LIST_SKIP,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_LIST_SKIP;

    #[test]
    fn test_defaults() {
        let params = ListParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit(), 50);
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(ListParams::new(0, 10_000).limit(), MAX_LIST_LIMIT);
        assert_eq!(ListParams::new(0, 10).limit(), 10);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(ListParams::new(0, 0).validate().is_err());
        assert!(ListParams::new(3, 1).validate().is_ok());
    }

    #[test]
    fn test_skip_beyond_store_range_is_rejected() {
        assert!(ListParams::new(MAX_LIST_SKIP, 10).validate().is_ok());

        let errors = ListParams::new(MAX_LIST_SKIP + 1, 10).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("skip"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, DEFAULT_LIST_SKIP);
        assert_eq!(params.limit, DEFAULT_LIST_LIMIT);
    }
}
