//! Error types and error codes for Foodgram
//!
//! This module defines:
//! - `FoodgramError`: Application-specific error enum
//! - `ErrorCode`: Structured error codes for API responses

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum FoodgramError {
    #[error("authentication credentials were not provided or are invalid: {0}")]
    Unauthorized(String),

    #[error("shopping list aggregation failed: {0}")]
    AggregationFailed(String),

    #[error("report rendering failed: {0}")]
    RenderFailed(String),

    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("{0} not found")]
    ResourceNotFound(String),

    #[error("{0}")]
    ResourceConflict(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl FoodgramError {
    /// Wrap a storage failure raised while reading the ingredient ledger.
    pub fn aggregation(err: impl Display) -> Self {
        FoodgramError::AggregationFailed(err.to_string())
    }

    /// Wrap a storage failure raised on any other path.
    pub fn database(err: impl Display) -> Self {
        FoodgramError::DatabaseError(err.to_string())
    }
}

/// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

// General success and error codes
pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const ACCESS_DENIED: ErrorCode<'static> = ErrorCode {
    code: 10001,
    message: "access denied",
};

pub const DATA_ACCESS_ERROR: ErrorCode<'static> = ErrorCode {
    code: 10002,
    message: "data access error",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

pub const RESOURCE_CONFLICT: ErrorCode<'static> = ErrorCode {
    code: 20005,
    message: "resource conflict",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};

pub const REPORT_RENDER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30001,
    message: "report render error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foodgram_error_display() {
        let err = FoodgramError::Unauthorized("token expired!".to_string());
        assert_eq!(
            format!("{}", err),
            "authentication credentials were not provided or are invalid: token expired!"
        );

        let err = FoodgramError::AggregationFailed("connection refused".to_string());
        assert_eq!(
            format!("{}", err),
            "shopping list aggregation failed: connection refused"
        );

        let err = FoodgramError::RenderFailed("font not found".to_string());
        assert_eq!(format!("{}", err), "report rendering failed: font not found");

        let err = FoodgramError::IllegalArgument("amount out of range".to_string());
        assert_eq!(format!("{}", err), "caused: amount out of range");

        let err = FoodgramError::ResourceNotFound("recipe 7".to_string());
        assert_eq!(format!("{}", err), "recipe 7 not found");
    }

    #[test]
    fn test_error_helpers() {
        let err = FoodgramError::aggregation("pool timed out");
        assert!(matches!(err, FoodgramError::AggregationFailed(ref m) if m == "pool timed out"));

        let err = FoodgramError::database(anyhow::anyhow!("deadlock"));
        assert!(matches!(err, FoodgramError::DatabaseError(ref m) if m == "deadlock"));
    }

    #[test]
    fn test_error_code_constants() {
        assert_eq!(SUCCESS.code, 0);
        assert_eq!(SUCCESS.message, "success");
        assert_eq!(ACCESS_DENIED.code, 10001);
        assert_eq!(DATA_ACCESS_ERROR.code, 10002);
        assert_eq!(PARAMETER_VALIDATE_ERROR.code, 20002);
        assert_eq!(RESOURCE_NOT_FOUND.code, 20004);
        assert_eq!(RESOURCE_CONFLICT.code, 20005);
        assert_eq!(SERVER_ERROR.code, 30000);
        assert_eq!(REPORT_RENDER_ERROR.code, 30001);
    }
}
