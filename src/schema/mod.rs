//! Schema model for the E2SM-NTN service model.
//!
//! This module is the single source of truth for field order, value range,
//! fixed-point scale factor, and optionality of every wire field. The
//! encoder, decoder, and validator all consume these tables; range
//! constants are never defined anywhere else.
//!
//! ## Wire Encoding
//!
//! Every field is a PER-style constrained whole number: a field with
//! scaled range `[min, max]` travels as `scaled_value - min`, an unsigned
//! integer occupying exactly [`FieldSpec::bit_width`] bits. Signed fields
//! need no separate sign bit; the offset from `min` handles them.
//!
//! Fixed-point scale factors convert semantic floats at the API boundary:
//! `scaled = round(value * scale)` on encode, `value = scaled / scale` on
//! decode. A field's resolution is therefore `1 / scale`.

mod control;
mod indication;

pub use control::{ControlActionKind, params};
pub use indication::fields;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Number of bits occupied by the indication format discriminant.
pub const FORMAT_TAG_BITS: u32 = 2;

/// Number of bits occupied by the control action discriminant.
pub const ACTION_TAG_BITS: u32 = 3;

/// Declaration of a single wire field.
///
/// `min` and `max` are in scaled (integer) units; `scale` converts to and
/// from the semantic floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, used verbatim in error diagnostics
    pub name: &'static str,
    /// Smallest valid scaled value, inclusive
    pub min: i64,
    /// Largest valid scaled value, inclusive
    pub max: i64,
    /// Fixed-point scale factor (semantic value × scale = wire integer)
    pub scale: u32,
    /// Whether the field is preceded by a presence bit
    pub optional: bool,
}

impl FieldSpec {
    /// Declare a required field.
    pub const fn required(name: &'static str, min: i64, max: i64, scale: u32) -> Self {
        Self { name, min, max, scale, optional: false }
    }

    /// Declare an optional field (one presence bit precedes the value).
    pub const fn optional(name: &'static str, min: i64, max: i64, scale: u32) -> Self {
        Self { name, min, max, scale, optional: true }
    }

    /// Reuse this declaration as required, for formats where the field is
    /// mandatory (e.g. `next_satellite_id` in the handover-prep format).
    pub const fn as_required(mut self) -> Self {
        self.optional = false;
        self
    }

    /// Number of wire bits for this field's value, excluding any presence bit.
    pub const fn bit_width(&self) -> u32 {
        let span = (self.max - self.min) as u64;
        if span == 0 { 0 } else { 64 - span.leading_zeros() }
    }

    /// Smallest valid semantic value.
    pub fn semantic_min(&self) -> f64 {
        self.min as f64 / self.scale as f64
    }

    /// Largest valid semantic value.
    pub fn semantic_max(&self) -> f64 {
        self.max as f64 / self.scale as f64
    }

    /// Convert a semantic value to its scaled wire integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::RangeViolation`] (naming the field, the value,
    /// and the valid semantic range) if the scaled result falls outside
    /// `[min, max]`. Values are rejected, never clamped. Non-finite input
    /// is always a violation.
    pub fn to_scaled(&self, value: f64) -> Result<i64> {
        let scaled = (value * self.scale as f64).round();
        if !scaled.is_finite() || scaled < self.min as f64 || scaled > self.max as f64 {
            return Err(CodecError::range_violation(
                self.name,
                value,
                self.semantic_min(),
                self.semantic_max(),
            ));
        }
        Ok(scaled as i64)
    }

    /// Validate a decoded scaled integer and convert it back to its
    /// semantic value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DecodeValidation`] if the integer violates the
    /// declared range, indicating payload corruption or a schema mismatch.
    pub fn check_scaled(&self, scaled: i64) -> Result<f64> {
        if scaled < self.min || scaled > self.max {
            return Err(CodecError::decode_validation(
                self.name,
                scaled as f64 / self.scale as f64,
                self.semantic_min(),
                self.semantic_max(),
            ));
        }
        Ok(scaled as f64 / self.scale as f64)
    }
}

/// Indication message formats supported by the service model.
///
/// Encoder and decoder must agree on the format; the 2-bit wire
/// discriminant makes a mismatch detectable instead of producing a
/// garbage decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageFormat {
    /// Format 1: full NTN metrics, six measurement groups
    FullMetrics,
    /// Format 2: minimal subset for high-rate reporting
    Minimal,
    /// Format 3: handover preparation
    HandoverPrep,
}

impl MessageFormat {
    /// Wire discriminant carried in the message header.
    pub const fn wire_id(self) -> u8 {
        match self {
            MessageFormat::FullMetrics => 1,
            MessageFormat::Minimal => 2,
            MessageFormat::HandoverPrep => 3,
        }
    }

    /// Resolve a wire discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownFormat`] for unrecognized ids.
    pub fn from_wire(id: u8) -> Result<Self> {
        match id {
            1 => Ok(MessageFormat::FullMetrics),
            2 => Ok(MessageFormat::Minimal),
            3 => Ok(MessageFormat::HandoverPrep),
            other => Err(CodecError::UnknownFormat { format: other }),
        }
    }

    /// Ordered field table for this format. Order is part of the wire
    /// contract: PER packing is positional, not tagged.
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            MessageFormat::FullMetrics => indication::FULL_METRICS,
            MessageFormat::Minimal => indication::MINIMAL,
            MessageFormat::HandoverPrep => indication::HANDOVER_PREP,
        }
    }
}
