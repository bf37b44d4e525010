//! Codec strategies for the service model.
//!
//! Two interchangeable implementations of [`MessageCodec`] exist: the
//! bit-packed PER wire format ([`PerCodec`], the real one) and a
//! human-readable JSON rendition ([`JsonCodec`]) for debugging and
//! interoperability testing. The strategy is chosen at construction time;
//! business logic never branches on the encoding.

mod json;
mod per;

pub use json::JsonCodec;
pub use per::PerCodec;

use crate::error::Result;
use crate::schema::MessageFormat;
use crate::stats::StatsSnapshot;
use crate::types::{ControlAction, IndicationMessage};

/// A message codec for indication and control messages.
///
/// Implementations are `Send + Sync`; concurrent calls are safe, with the
/// statistics tracker as the only internally-synchronized state.
pub trait MessageCodec: Send + Sync {
    /// Encode an indication message to its wire form.
    fn encode_indication(&self, message: &IndicationMessage) -> Result<Vec<u8>>;

    /// Decode an indication message, checking it carries `expected` format.
    fn decode_indication(
        &self,
        bytes: &[u8],
        expected: MessageFormat,
    ) -> Result<IndicationMessage>;

    /// Encode a control action to its wire form.
    fn encode_control(&self, action: &ControlAction) -> Result<Vec<u8>>;

    /// Decode a control action.
    fn decode_control(&self, bytes: &[u8]) -> Result<ControlAction>;

    /// Snapshot of this codec's statistics.
    fn stats(&self) -> StatsSnapshot;

    /// Reset this codec's statistics.
    fn reset_stats(&self);
}

/// Wire encoding selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Bit-packed PER, the production wire format
    Per,
    /// Human-readable JSON, for debugging
    Json,
}

/// Construct a codec for the chosen encoding.
pub fn new_codec(encoding: Encoding) -> Box<dyn MessageCodec> {
    match encoding {
        Encoding::Per => Box::new(PerCodec::new()),
        Encoding::Json => Box::new(JsonCodec::new()),
    }
}
