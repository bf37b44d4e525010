//! Wire-level properties: size bounds, truncation detection, presence
//! bits, and range enforcement at the message boundary.

mod common;

use anyhow::Result;

use common::{full_report, full_report_no_optionals, handover_prep_report, minimal_report};
use e2sm_ntn::schema::{ACTION_TAG_BITS, FORMAT_TAG_BITS};
use e2sm_ntn::{
    CodecError, ControlAction, ControlActionKind, E2smNtn, IndicationMessage, MessageCodec,
    MessageFormat,
};

/// Wire bits for a message whose optional-field presence is given by
/// `present`: the format tag, one presence bit per optional, and each
/// present field at its declared width.
fn indication_bits(format: MessageFormat, present: impl Fn(&str) -> bool) -> u32 {
    let mut bits = FORMAT_TAG_BITS;
    for spec in format.fields() {
        if spec.optional {
            bits += 1;
            if present(spec.name) {
                bits += spec.bit_width();
            }
        } else {
            bits += spec.bit_width();
        }
    }
    bits
}

fn control_bits(kind: ControlActionKind) -> u32 {
    ACTION_TAG_BITS + kind.fields().iter().map(|f| f.bit_width()).sum::<u32>()
}

#[test]
fn encoded_size_matches_schema_bit_budget() -> Result<()> {
    let codec = E2smNtn::per();

    let cases = vec![
        (IndicationMessage::FullMetrics(full_report()), indication_bits(
            MessageFormat::FullMetrics,
            |_| true,
        )),
        (IndicationMessage::FullMetrics(full_report_no_optionals()), indication_bits(
            MessageFormat::FullMetrics,
            |_| false,
        )),
        (IndicationMessage::Minimal(minimal_report()), indication_bits(
            MessageFormat::Minimal,
            |_| false,
        )),
        (IndicationMessage::HandoverPrep(handover_prep_report()), indication_bits(
            MessageFormat::HandoverPrep,
            |_| false,
        )),
    ];

    for (message, expected_bits) in cases {
        let bytes = codec.encode_indication(&message)?;
        assert_eq!(
            bytes.len(),
            expected_bits.div_ceil(8) as usize,
            "size bound violated for {:?}",
            message.format()
        );
    }
    Ok(())
}

#[test]
fn encoding_is_deterministic_and_value_independent_in_size() -> Result<()> {
    let codec = E2smNtn::per();
    let message = IndicationMessage::FullMetrics(full_report());

    let first = codec.encode_indication(&message)?;
    let second = codec.encode_indication(&message)?;
    assert_eq!(first, second);

    // Different in-range values, identical size
    let mut other = full_report();
    other.satellite.elevation_angle_deg = 0.0;
    other.channel.rsrp_dbm = -31.0;
    other.impairments.doppler_shift_hz = 50_000;
    let other_bytes = codec.encode_indication(&IndicationMessage::FullMetrics(other))?;
    assert_eq!(first.len(), other_bytes.len());
    Ok(())
}

#[test]
fn every_strict_prefix_fails_as_truncated() -> Result<()> {
    let codec = E2smNtn::per();
    let message = IndicationMessage::Minimal(minimal_report());
    let bytes = codec.encode_indication(&message)?;

    for len in 0..bytes.len() {
        let err = codec.decode_indication(&bytes[..len], MessageFormat::Minimal).unwrap_err();
        assert!(
            matches!(err, CodecError::Truncated { .. }),
            "prefix of {len} bytes gave {err:?} instead of Truncated"
        );
    }
    Ok(())
}

#[test]
fn truncated_control_messages_are_detected() -> Result<()> {
    let codec = E2smNtn::per();
    let action =
        ControlAction::TriggerHandover { target_satellite_id: 2048, execution_offset_ms: 5000 };
    let bytes = codec.encode_control(&action)?;

    for len in 0..bytes.len() {
        let err = codec.decode_control(&bytes[..len]).unwrap_err();
        assert!(matches!(err, CodecError::Truncated { .. }));
    }
    Ok(())
}

#[test]
fn absent_optional_shrinks_the_payload_by_its_field_width() -> Result<()> {
    let codec = E2smNtn::per();

    let with = full_report();
    let mut without = full_report();
    without.handover.next_satellite_id = None;

    let with_bits = indication_bits(MessageFormat::FullMetrics, |_| true);
    let without_bits =
        indication_bits(MessageFormat::FullMetrics, |name| name != "next_satellite_id");
    // Presence bit stays; only the 12-bit value disappears
    assert_eq!(with_bits - without_bits, 12);

    let with_bytes = codec.encode_indication(&IndicationMessage::FullMetrics(with))?;
    let without_bytes = codec.encode_indication(&IndicationMessage::FullMetrics(without))?;
    assert_eq!(with_bytes.len(), with_bits.div_ceil(8) as usize);
    assert_eq!(without_bytes.len(), without_bits.div_ceil(8) as usize);
    Ok(())
}

#[test]
fn control_payloads_match_their_bit_budget() -> Result<()> {
    let codec = E2smNtn::per();
    let action = ControlAction::PowerControl { power_adjustment_db: -2.5 };
    let bytes = codec.encode_control(&action)?;
    assert_eq!(bytes.len(), control_bits(ControlActionKind::PowerControl).div_ceil(8) as usize);
    Ok(())
}

#[test]
fn boundary_values_encode_and_one_step_outside_fails() {
    // Schema-wide: every field accepts its declared min and max and rejects
    // one resolution step outside either bound.
    for format in
        [MessageFormat::FullMetrics, MessageFormat::Minimal, MessageFormat::HandoverPrep]
    {
        for spec in format.fields() {
            let step = 1.0 / spec.scale as f64;

            assert_eq!(spec.to_scaled(spec.semantic_min()).unwrap(), spec.min, "{}", spec.name);
            assert_eq!(spec.to_scaled(spec.semantic_max()).unwrap(), spec.max, "{}", spec.name);

            let below = spec.to_scaled(spec.semantic_min() - step).unwrap_err();
            assert!(
                matches!(below, CodecError::RangeViolation { field, .. } if field == spec.name)
            );
            let above = spec.to_scaled(spec.semantic_max() + step).unwrap_err();
            assert!(
                matches!(above, CodecError::RangeViolation { field, .. } if field == spec.name)
            );
        }
    }
}

#[test]
fn out_of_range_record_fails_encode_with_field_detail() {
    let codec = E2smNtn::per();
    let mut report = full_report();
    report.satellite.elevation_angle_deg = 90.01;

    let err = codec.encode_indication(&IndicationMessage::FullMetrics(report)).unwrap_err();
    match err {
        CodecError::RangeViolation { field, value, min, max } => {
            assert_eq!(field, "elevation_angle");
            assert_eq!(value, 90.01);
            assert_eq!(min, 0.0);
            assert_eq!(max, 90.0);
        }
        other => panic!("expected RangeViolation, got {other:?}"),
    }
}

#[test]
fn decoding_under_the_wrong_format_is_an_error() -> Result<()> {
    let codec = E2smNtn::per();
    let bytes = codec.encode_indication(&IndicationMessage::Minimal(minimal_report()))?;

    let err = codec.decode_indication(&bytes, MessageFormat::HandoverPrep).unwrap_err();
    assert!(matches!(err, CodecError::FormatMismatch { expected: 3, found: 2 }));
    Ok(())
}

#[test]
fn stats_track_sizes_and_latencies() -> Result<()> {
    let codec = E2smNtn::per();
    let message = IndicationMessage::Minimal(minimal_report());

    let bytes = codec.encode_indication(&message)?;
    codec.encode_indication(&IndicationMessage::FullMetrics(full_report()))?;
    codec.decode_indication(&bytes, MessageFormat::Minimal)?;

    let snap = codec.stats();
    assert_eq!(snap.encodes, 2);
    assert_eq!(snap.decodes, 1);
    assert_eq!(snap.min_encoded_bytes, Some(bytes.len() as u64));
    assert!(snap.max_encoded_bytes.unwrap() > bytes.len() as u64);
    assert!(snap.mean_encoded_bytes > 0.0);

    codec.reset_stats();
    assert_eq!(codec.stats().encodes, 0);
    assert_eq!(codec.stats().min_encoded_bytes, None);
    Ok(())
}
