//! The closed set of error classifications returned by the API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Description used for any value outside the defined set.
pub const UNDEFINED_DESCRIPTION: &str = "FIXME: this should be a helpful message";

/// An unsigned 32-bit error code.
///
/// Numeric values follow declaration order. New codes are only ever
/// appended so that values already persisted or sent over the wire keep
/// their meaning. Integers outside the defined set are kept in
/// [`Code::Unknown`] so the mapping from `u32` is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Code {
    /// No error.
    Success,
    /// The auth token is invalid or has expired.
    InvalidToken,
    /// Authentication is needed for execution.
    Unauthenticated,
    /// Authentication failed.
    BadAuthenticationData,
    /// The input parameters are not valid.
    BadInputData,
    /// An unexpected or undesired problem.
    Internal,
    /// A value with no defined meaning.
    Unknown(u32),
}

impl Code {
    /// Numeric value of this code.
    pub fn as_u32(self) -> u32 {
        match self {
            Code::Success => 0,
            Code::InvalidToken => 1,
            Code::Unauthenticated => 2,
            Code::BadAuthenticationData => 3,
            Code::BadInputData => 4,
            Code::Internal => 5,
            Code::Unknown(value) => value,
        }
    }

    /// Canonical human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            Code::Success => "Success",
            Code::InvalidToken => "Invalid or expired token",
            Code::Unauthenticated => "Unauthenticated request",
            Code::BadAuthenticationData => "Bad authentication data",
            Code::BadInputData => "Bad input data",
            Code::Internal => "Internal error. Please submit a query to the support team",
            Code::Unknown(_) => UNDEFINED_DESCRIPTION,
        }
    }

    pub fn is_success(self) -> bool {
        self == Code::Success
    }

    /// Returns `false` for values carried by [`Code::Unknown`].
    pub fn is_known(self) -> bool {
        !matches!(self, Code::Unknown(_))
    }
}

/// Canonical description for a raw numeric code.
pub fn describe(value: u32) -> &'static str {
    Code::from(value).describe()
}

impl From<u32> for Code {
    fn from(value: u32) -> Self {
        match value {
            0 => Code::Success,
            1 => Code::InvalidToken,
            2 => Code::Unauthenticated,
            3 => Code::BadAuthenticationData,
            4 => Code::BadInputData,
            5 => Code::Internal,
            other => Code::Unknown(other),
        }
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.as_u32()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, Code, UNDEFINED_DESCRIPTION};

    const DEFINED: [Code; 6] = [
        Code::Success,
        Code::InvalidToken,
        Code::Unauthenticated,
        Code::BadAuthenticationData,
        Code::BadInputData,
        Code::Internal,
    ];

    #[test]
    fn test_values_follow_declaration_order() {
        for (expected, code) in DEFINED.iter().enumerate() {
            assert_eq!(code.as_u32(), expected as u32);
            assert_eq!(Code::from(expected as u32), *code);
        }
    }

    #[test]
    fn test_defined_codes_have_their_own_description() {
        for code in DEFINED {
            let description = code.describe();
            assert!(!description.is_empty());
            assert_ne!(description, UNDEFINED_DESCRIPTION);
            assert_eq!(code.to_string(), description);
        }
        assert_eq!(Code::Unauthenticated.describe(), "Unauthenticated request");
    }

    #[test]
    fn test_undefined_values_fall_back() {
        for value in [6, 42, u32::MAX] {
            assert_eq!(describe(value), UNDEFINED_DESCRIPTION);
            let code = Code::from(value);
            assert!(!code.is_known());
            assert_eq!(code.as_u32(), value);
        }
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Code::BadInputData).unwrap(), "4");
        let code: Code = serde_json::from_str("5").unwrap();
        assert_eq!(code, Code::Internal);
        let code: Code = serde_json::from_str("99").unwrap();
        assert_eq!(code, Code::Unknown(99));
    }

    #[test]
    fn test_is_success() {
        assert!(Code::Success.is_success());
        assert!(!Code::Internal.is_success());
    }
}
