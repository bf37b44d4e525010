//! Error types for codec operations.
//!
//! This module provides structured error handling for the E2SM-NTN codec.
//! All errors implement the `std::error::Error` trait and carry enough
//! context (field name, offending value, valid range) to log actionable
//! diagnostics without inspecting raw bytes.
//!
//! ## Error Categories
//!
//! - **Range Violation**: encode-time, a field value falls outside its schema range
//! - **Missing Field**: encode-time, a required field is absent from the record
//! - **Truncated**: decode-time, the byte buffer ends before the format is complete
//! - **Decode Validation**: decode-time, a decoded integer violates its schema range
//! - **Unknown Format / Action**: an unrecognized format or action discriminant
//! - **Format Mismatch**: the wire discriminant disagrees with the caller's expectation
//!
//! ## Data Errors
//!
//! Decode-side errors indicate a bad, corrupted, or schema-mismatched payload
//! rather than caller misuse:
//!
//! ```rust
//! use e2sm_ntn::CodecError;
//!
//! let error = CodecError::Truncated { needed_bits: 14, available_bits: 3 };
//! assert!(error.is_data_error());
//! ```
//!
//! ## Helper Constructors
//!
//! Use helper methods for common error scenarios:
//!
//! ```rust
//! use e2sm_ntn::CodecError;
//!
//! let range = CodecError::range_violation("elevation_angle", 91.5, 0.0, 90.0);
//! let missing = CodecError::missing_field("rsrp_dbm");
//! assert!(range.to_string().contains("elevation_angle"));
//! assert!(missing.to_string().contains("rsrp_dbm"));
//! ```

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Main error type for codec operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    #[error("field '{field}' value {value} outside valid range [{min}, {max}]")]
    RangeViolation { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("required field '{field}' missing from record")]
    MissingField { field: &'static str },

    #[error("truncated message: needed {needed_bits} more bits, {available_bits} available")]
    Truncated { needed_bits: u32, available_bits: usize },

    #[error("decoded field '{field}' value {value} outside valid range [{min}, {max}]")]
    DecodeValidation { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("unknown message format {format}")]
    UnknownFormat { format: u8 },

    #[error("unknown control action discriminant {action}")]
    UnknownAction { action: u8 },

    #[error("format mismatch: expected format {expected}, wire carries format {found}")]
    FormatMismatch { expected: u8, found: u8 },

    #[error("debug JSON codec error")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl CodecError {
    /// Returns whether this error indicates bad wire data (corruption or a
    /// schema mismatch between peers) rather than caller misuse.
    pub fn is_data_error(&self) -> bool {
        match self {
            CodecError::Truncated { .. } => true,
            CodecError::DecodeValidation { .. } => true,
            CodecError::UnknownFormat { .. } => true,
            CodecError::UnknownAction { .. } => true,
            CodecError::FormatMismatch { .. } => true,
            CodecError::RangeViolation { .. } => false,
            CodecError::MissingField { .. } => false,
            CodecError::Json { .. } => false,
        }
    }

    /// Helper constructor for encode-time range violations.
    pub fn range_violation(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        CodecError::RangeViolation { field, value, min, max }
    }

    /// Helper constructor for missing required fields.
    pub fn missing_field(field: &'static str) -> Self {
        CodecError::MissingField { field }
    }

    /// Helper constructor for decode-time validation failures.
    pub fn decode_validation(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        CodecError::DecodeValidation { field, value, min, max }
    }

    /// Helper constructor for format mismatches.
    pub fn format_mismatch(expected: u8, found: u8) -> Self {
        CodecError::FormatMismatch { expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn range_errors_name_field_value_and_bounds(
                value in -1.0e6f64..1.0e6f64,
                min in -1.0e3f64..0.0f64,
                max in 0.0f64..1.0e3f64
            ) {
                let err = CodecError::range_violation("tx_power_dbm", value, min, max);
                let msg = err.to_string();
                prop_assert!(msg.contains("tx_power_dbm"));
                prop_assert!(msg.contains(&value.to_string()));
                prop_assert!(msg.contains(&min.to_string()));
                prop_assert!(msg.contains(&max.to_string()));

                let err = CodecError::decode_validation("tx_power_dbm", value, min, max);
                prop_assert!(err.to_string().contains("tx_power_dbm"));
            }

            #[test]
            fn truncation_errors_report_bit_counts(
                needed in 1u32..64u32,
                available in 0usize..64usize
            ) {
                let err = CodecError::Truncated { needed_bits: needed, available_bits: available };
                let msg = err.to_string();
                prop_assert!(msg.contains(&needed.to_string()));
                prop_assert!(msg.contains(&available.to_string()));
                prop_assert!(err.is_data_error());
            }

            #[test]
            fn no_error_message_is_empty(format in 0u8..=255u8) {
                let errors = vec![
                    CodecError::range_violation("f", 1.0, 0.0, 0.5),
                    CodecError::missing_field("f"),
                    CodecError::Truncated { needed_bits: 8, available_bits: 0 },
                    CodecError::decode_validation("f", 1.0, 0.0, 0.5),
                    CodecError::UnknownFormat { format },
                    CodecError::UnknownAction { action: format },
                    CodecError::format_mismatch(1, format),
                ];
                for err in errors {
                    prop_assert!(!err.to_string().is_empty());
                }
            }
        }
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: CodecError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<CodecError>();

        let error = CodecError::missing_field("cqi");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn data_error_classification() {
        assert!(CodecError::Truncated { needed_bits: 1, available_bits: 0 }.is_data_error());
        assert!(CodecError::UnknownFormat { format: 9 }.is_data_error());
        assert!(CodecError::format_mismatch(1, 2).is_data_error());
        assert!(!CodecError::missing_field("cqi").is_data_error());
        assert!(!CodecError::range_violation("cqi", 16.0, 0.0, 15.0).is_data_error());
    }

    #[test]
    fn json_conversion_works() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::Json { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
