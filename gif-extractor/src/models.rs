use std::num::IntErrorKind;

use crate::error::{ExtractError, Result};

/// HTTP status that marks a request as successful.
pub const SUCCESS: i64 = 200;

/// Reads a status column, tolerating surrounding whitespace. Integers too
/// large for `i64` are valid statuses that are simply not a success.
pub fn is_success(value: &str, line: usize) -> Result<bool> {
    match value.trim().parse::<i64>() {
        Ok(status) => Ok(status == SUCCESS),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(false)
        }
        Err(_) => Err(ExtractError::NonNumericStatus {
            line,
            value: value.to_string(),
        }),
    }
}

/// Case-insensitive check of a request method.
pub fn is_get(method: &str) -> bool {
    method.to_uppercase() == "GET"
}

/// The quoted `METHOD PATH VERSION` field of a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub version: String,
}

impl Request {
    /// Returns `None` when the field has no path token.
    pub fn parse(field: &str) -> Option<Self> {
        let mut parts = field.split_whitespace();
        let method = parts.next()?.to_string();
        let path = parts.next()?.to_string();
        let version = parts.next().unwrap_or_default().to_string();
        Some(Self {
            method,
            path,
            version,
        })
    }
}
