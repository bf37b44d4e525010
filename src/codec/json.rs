//! Human-readable JSON codec for debugging.
//!
//! Applies the same schema validation as the PER path so a record that
//! round-trips here also round-trips on the wire format, just at many
//! times the size. Not for production links.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::error::{CodecError, Result};
use crate::schema::MessageFormat;
use crate::stats::{StatsSnapshot, StatsTracker};
use crate::types::{ControlAction, IndicationMessage};
use crate::validate;

use super::MessageCodec;

/// JSON rendition of the service-model messages.
#[derive(Debug, Default)]
pub struct JsonCodec {
    stats: Arc<StatsTracker>,
}

impl JsonCodec {
    /// Create a codec with its own statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec recording into a shared tracker.
    pub fn with_stats(stats: Arc<StatsTracker>) -> Self {
        Self { stats }
    }

    fn encode_indication_inner(&self, message: &IndicationMessage) -> Result<Vec<u8>> {
        validate::validate(message)?;
        let bytes = serde_json::to_vec(message)?;
        debug!(format = ?message.format(), len = bytes.len(), "encoded indication as JSON");
        Ok(bytes)
    }

    fn decode_indication_inner(
        &self,
        bytes: &[u8],
        expected: MessageFormat,
    ) -> Result<IndicationMessage> {
        let message: IndicationMessage = serde_json::from_slice(bytes)?;
        if message.format() != expected {
            return Err(CodecError::format_mismatch(
                expected.wire_id(),
                message.format().wire_id(),
            ));
        }
        validate::validate(&message).map_err(remap_to_decode)?;
        Ok(message)
    }

    fn encode_control_inner(&self, action: &ControlAction) -> Result<Vec<u8>> {
        validate::validate_control(action)?;
        Ok(serde_json::to_vec(action)?)
    }

    fn decode_control_inner(&self, bytes: &[u8]) -> Result<ControlAction> {
        let action: ControlAction = serde_json::from_slice(bytes)?;
        validate::validate_control(&action).map_err(remap_to_decode)?;
        Ok(action)
    }
}

/// A range violation found while decoding is a payload problem, not a
/// caller problem; report it under the decode-side taxonomy.
fn remap_to_decode(err: CodecError) -> CodecError {
    match err {
        CodecError::RangeViolation { field, value, min, max } => {
            CodecError::DecodeValidation { field, value, min, max }
        }
        other => other,
    }
}

impl MessageCodec for JsonCodec {
    fn encode_indication(&self, message: &IndicationMessage) -> Result<Vec<u8>> {
        let started = Instant::now();
        let result = self.encode_indication_inner(message);
        match &result {
            Ok(bytes) => self.stats.record_encode(bytes.len(), started.elapsed()),
            Err(_) => self.stats.record_encode_error(),
        }
        result
    }

    fn decode_indication(
        &self,
        bytes: &[u8],
        expected: MessageFormat,
    ) -> Result<IndicationMessage> {
        let started = Instant::now();
        let result = self.decode_indication_inner(bytes, expected);
        match &result {
            Ok(_) => self.stats.record_decode(bytes.len(), started.elapsed()),
            Err(_) => self.stats.record_decode_error(),
        }
        result
    }

    fn encode_control(&self, action: &ControlAction) -> Result<Vec<u8>> {
        let started = Instant::now();
        let result = self.encode_control_inner(action);
        match &result {
            Ok(bytes) => self.stats.record_encode(bytes.len(), started.elapsed()),
            Err(_) => self.stats.record_encode_error(),
        }
        result
    }

    fn decode_control(&self, bytes: &[u8]) -> Result<ControlAction> {
        let started = Instant::now();
        let result = self.decode_control_inner(bytes);
        match &result {
            Ok(_) => self.stats.record_decode(bytes.len(), started.elapsed()),
            Err(_) => self.stats.record_decode_error(),
        }
        result
    }

    fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn reset_stats(&self) {
        self.stats.reset()
    }
}
