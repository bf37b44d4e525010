//! Bit-packed PER codec, the production wire format.
//!
//! Layout: a 2-bit format discriminant (3-bit action discriminant for
//! control messages), then each schema field in table order at its exact
//! bit width. Optional fields are preceded inline by one presence bit.
//! The final byte is zero-padded.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::bits::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::schema::{
    ACTION_TAG_BITS, ControlActionKind, FORMAT_TAG_BITS, FieldSpec, MessageFormat,
};
use crate::stats::{StatsSnapshot, StatsTracker};
use crate::types::{ControlAction, IndicationMessage};

use super::MessageCodec;

/// The bit-packed PER codec.
///
/// Stateless apart from its statistics tracker; cheap to construct and
/// safe to share across threads.
#[derive(Debug, Default)]
pub struct PerCodec {
    stats: Arc<StatsTracker>,
}

impl PerCodec {
    /// Create a codec with its own statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec recording into a shared tracker.
    pub fn with_stats(stats: Arc<StatsTracker>) -> Self {
        Self { stats }
    }

    fn encode_indication_inner(&self, message: &IndicationMessage) -> Result<Vec<u8>> {
        let format = message.format();
        let mut writer = BitWriter::new();
        writer.write_bits((format.wire_id() - 1) as u64, FORMAT_TAG_BITS);
        pack_fields(&mut writer, format.fields(), &message.field_values())?;
        let bytes = writer.finish();
        debug!(?format, len = bytes.len(), "encoded indication");
        Ok(bytes)
    }

    fn decode_indication_inner(
        &self,
        bytes: &[u8],
        expected: MessageFormat,
    ) -> Result<IndicationMessage> {
        let mut reader = BitReader::new(bytes);
        let tag = reader.read_bits(FORMAT_TAG_BITS)? as u8;
        let wire_format = MessageFormat::from_wire(tag + 1)?;
        if wire_format != expected {
            return Err(CodecError::format_mismatch(expected.wire_id(), wire_format.wire_id()));
        }

        let values = unpack_fields(&mut reader, expected.fields())?;
        let message = IndicationMessage::from_field_values(expected, &values)?;
        check_trailing(&reader);
        Ok(message)
    }

    fn encode_control_inner(&self, action: &ControlAction) -> Result<Vec<u8>> {
        let kind = action.kind();
        let mut writer = BitWriter::new();
        writer.write_bits(kind.wire_id() as u64, ACTION_TAG_BITS);
        pack_fields(&mut writer, kind.fields(), &action.field_values())?;
        let bytes = writer.finish();
        debug!(?kind, len = bytes.len(), "encoded control");
        Ok(bytes)
    }

    fn decode_control_inner(&self, bytes: &[u8]) -> Result<ControlAction> {
        let mut reader = BitReader::new(bytes);
        let tag = reader.read_bits(ACTION_TAG_BITS)? as u8;
        let kind = ControlActionKind::from_wire(tag)?;

        let values = unpack_fields(&mut reader, kind.fields())?;
        let action = ControlAction::from_field_values(kind, &values)?;
        check_trailing(&reader);
        Ok(action)
    }
}

impl MessageCodec for PerCodec {
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

/// Pack `values` against `specs`, in table order.
///
/// Optional fields emit a presence bit first; a missing required value is
/// a [`CodecError::MissingField`].
fn pack_fields(
    writer: &mut BitWriter,
    specs: &[FieldSpec],
    values: &[Option<f64>],
) -> Result<()> {
    debug_assert_eq!(specs.len(), values.len(), "record adapter out of sync with schema");
    for (spec, value) in specs.iter().zip(values) {
        match (spec.optional, value) {
            (true, Some(value)) => {
                writer.write_bit(true);
                write_value(writer, spec, *value)?;
            }
            (true, None) => writer.write_bit(false),
            (false, Some(value)) => write_value(writer, spec, *value)?,
            (false, None) => return Err(CodecError::missing_field(spec.name)),
        }
    }
    Ok(())
}

fn write_value(writer: &mut BitWriter, spec: &FieldSpec, value: f64) -> Result<()> {
    let scaled = spec.to_scaled(value)?;
    writer.write_bits((scaled - spec.min) as u64, spec.bit_width());
    Ok(())
}

/// Unpack one value per spec, validating each decoded integer against its
/// declared range.
fn unpack_fields(reader: &mut BitReader<'_>, specs: &[FieldSpec]) -> Result<Vec<Option<f64>>> {
    specs
        .iter()
        .map(|spec| {
            if spec.optional && !reader.read_bit()? {
                return Ok(None);
            }
            let raw = reader.read_bits(spec.bit_width())?;
            let scaled = spec.min + raw as i64;
            spec.check_scaled(scaled).map(Some)
        })
        .collect()
}

/// Trailing data beyond final-byte padding is tolerated for forward
/// compatibility, but logged.
fn check_trailing(reader: &BitReader<'_>) {
    let remaining = reader.bits_remaining();
    if remaining >= 8 {
        warn!(trailing_bits = remaining, "ignoring trailing data after decoded message");
    }
}
