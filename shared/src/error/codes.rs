//! Unified error codes for the Funhouse platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Customer errors
//! - 4xxx: Booking errors
//! - 5xxx: Task errors
//! - 6xxx: Quote errors
//! - 7xxx: Site content errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 3xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 3001,
    /// Email already registered to another customer
    CustomerEmailExists = 3002,
    /// Phone number does not match the accepted format
    CustomerInvalidPhone = 3003,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Monetary field does not fit NUMERIC(10,2)
    BookingInvalidAmount = 4002,

    // ==================== 5xxx: Task ====================
    /// Task not found
    TaskNotFound = 5001,

    // ==================== 6xxx: Quote ====================
    /// Quote not found
    QuoteNotFound = 6001,
    /// Quote number collided repeatedly under concurrent creation
    QuoteNumberConflict = 6002,

    // ==================== 7xxx: Site content ====================
    /// Service not found
    ServiceNotFound = 7001,
    /// Portfolio project not found
    PortfolioNotFound = 7002,
    /// Team member not found
    TeamMemberNotFound = 7003,
    /// Site content key not found
    ContentNotFound = 7004,
    /// Contact inquiry not found
    InquiryNotFound = 7005,
    /// Slug already in use
    SlugExists = 7006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Notification dispatch failed
    NotificationFailed = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",

            Self::CustomerNotFound => "Customer not found",
            Self::CustomerEmailExists => "Email already registered",
            Self::CustomerInvalidPhone => "Invalid phone number format",

            Self::BookingNotFound => "Booking not found",
            Self::BookingInvalidAmount => "Invalid monetary amount",

            Self::TaskNotFound => "Task not found",

            Self::QuoteNotFound => "Quote not found",
            Self::QuoteNumberConflict => "Quote number conflict, please retry",

            Self::ServiceNotFound => "Service not found",
            Self::PortfolioNotFound => "Portfolio project not found",
            Self::TeamMemberNotFound => "Team member not found",
            Self::ContentNotFound => "Site content not found",
            Self::InquiryNotFound => "Contact inquiry not found",
            Self::SlugExists => "Slug already in use",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
            Self::NotificationFailed => "Notification dispatch failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            3001 => Self::CustomerNotFound,
            3002 => Self::CustomerEmailExists,
            3003 => Self::CustomerInvalidPhone,
            4001 => Self::BookingNotFound,
            4002 => Self::BookingInvalidAmount,
            5001 => Self::TaskNotFound,
            6001 => Self::QuoteNotFound,
            6002 => Self::QuoteNumberConflict,
            7001 => Self::ServiceNotFound,
            7002 => Self::PortfolioNotFound,
            7003 => Self::TeamMemberNotFound,
            7004 => Self::ContentNotFound,
            7005 => Self::InquiryNotFound,
            7006 => Self::SlugExists,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,
            9004 => Self::NotificationFailed,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::CustomerEmailExists,
            ErrorCode::QuoteNumberConflict,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(8888).is_err());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::QuoteNumberConflict.to_string(), "E6002");
    }
}
