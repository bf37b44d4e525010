//! Bit-packed ASN.1 PER codec for the E2SM-NTN service model.
//!
//! This crate encodes and decodes non-terrestrial-network telemetry —
//! satellite geometry, channel quality, link impairments, handover
//! prediction — into a dense PER-style (unaligned) wire format, plus the
//! matching control-action messages. Every field's range, scale factor,
//! and optionality lives in a single schema model; out-of-range values
//! are rejected, never clamped, on both encode and decode.
//!
//! # Features
//!
//! - **Compact**: a full 31-field metrics record packs into ~50 bytes,
//!   an order of magnitude under its JSON rendition
//! - **Strict**: schema-constrained ranges, typed errors naming field,
//!   value, and valid range
//! - **Lossless**: round trips are exact to each field's fixed-point
//!   resolution
//! - **Swappable**: PER and debug-JSON codecs behind one strategy trait
//!
//! # Quick Start
//!
//! ```rust
//! use e2sm_ntn::{E2smNtn, IndicationMessage, MessageCodec, MessageFormat, MinimalReport};
//!
//! fn main() -> e2sm_ntn::Result<()> {
//!     let codec = E2smNtn::per();
//!     let message = IndicationMessage::Minimal(MinimalReport {
//!         satellite_id: 42,
//!         elevation_angle_deg: 45.67,
//!         rsrp_dbm: -95.5,
//!         sinr_db: 12.3,
//!         doppler_shift_hz: -18_400,
//!         propagation_delay_ms: 12.39,
//!     });
//!
//!     let bytes = codec.encode_indication(&message)?;
//!     let decoded = codec.decode_indication(&bytes, MessageFormat::Minimal)?;
//!     assert_eq!(decoded, message);
//!     Ok(())
//! }
//! ```

// Core types and error handling
pub mod bits;
mod codec;
mod error;
pub mod schema;
mod stats;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_support;
pub mod types;
pub mod validate;

// Core exports
pub use codec::{Encoding, JsonCodec, MessageCodec, PerCodec, new_codec};
pub use error::{CodecError, Result};
pub use stats::{StatsSnapshot, StatsTracker};
pub use types::*;

// Schema exports
pub use schema::{ControlActionKind, FieldSpec, MessageFormat};

/// Unified entry point for codec construction.
///
/// # Examples
///
/// ## Production wire format
/// ```rust
/// use e2sm_ntn::E2smNtn;
///
/// let codec = E2smNtn::per();
/// ```
///
/// ## Debug JSON, behind the strategy trait
/// ```rust
/// use e2sm_ntn::{E2smNtn, Encoding};
///
/// let codec = E2smNtn::codec(Encoding::Json);
/// ```
pub struct E2smNtn;

impl E2smNtn {
    /// The bit-packed PER codec, the production wire format.
    pub fn per() -> PerCodec {
        PerCodec::new()
    }

    /// The human-readable JSON codec, for debugging and interop testing.
    pub fn debug_json() -> JsonCodec {
        JsonCodec::new()
    }

    /// A codec for the chosen encoding, behind the strategy trait.
    pub fn codec(encoding: Encoding) -> Box<dyn MessageCodec> {
        new_codec(encoding)
    }
}
