//! Standalone schema conformance checking.
//!
//! Applies exactly the constraints the encoder applies — range, scale,
//! required-field presence — without producing any bytes, so callers can
//! vet a candidate record cheaply. A record that passes [`validate`] is
//! guaranteed to encode without a range or missing-field error.

use crate::error::{CodecError, Result};
use crate::schema::FieldSpec;
use crate::types::{ControlAction, IndicationMessage};

/// Check an indication message against its format's schema.
///
/// # Errors
///
/// Returns the first [`CodecError::RangeViolation`] or
/// [`CodecError::MissingField`] found, in schema field order.
pub fn validate(message: &IndicationMessage) -> Result<()> {
    check_fields(message.format().fields(), &message.field_values())
}

/// Check a control action against its parameter schema.
pub fn validate_control(action: &ControlAction) -> Result<()> {
    check_fields(action.kind().fields(), &action.field_values())
}

/// Convenience wrapper over [`validate`] for yes/no call sites.
pub fn is_valid(message: &IndicationMessage) -> bool {
    validate(message).is_ok()
}

/// Human-readable failure detail, or `None` when the message conforms.
pub fn explain(message: &IndicationMessage) -> Option<String> {
    validate(message).err().map(|err| err.to_string())
}

fn check_fields(specs: &[FieldSpec], values: &[Option<f64>]) -> Result<()> {
    debug_assert_eq!(specs.len(), values.len(), "record adapter out of sync with schema");
    for (spec, value) in specs.iter().zip(values) {
        match value {
            Some(value) => {
                spec.to_scaled(*value)?;
            }
            None if spec.optional => {}
            None => return Err(CodecError::missing_field(spec.name)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{full_report, minimal_report};
    use crate::types::FadeMitigationScheme;

    #[test]
    fn conforming_records_pass() {
        assert!(validate(&IndicationMessage::FullMetrics(full_report())).is_ok());
        assert!(is_valid(&IndicationMessage::Minimal(minimal_report())));
        assert!(explain(&IndicationMessage::Minimal(minimal_report())).is_none());
    }

    #[test]
    fn out_of_range_field_is_named() {
        let mut report = full_report();
        report.channel.rsrp_dbm = -157.0;
        let message = IndicationMessage::FullMetrics(report);
        match validate(&message).unwrap_err() {
            CodecError::RangeViolation { field, value, .. } => {
                assert_eq!(field, "rsrp_dbm");
                assert_eq!(value, -157.0);
            }
            other => panic!("expected RangeViolation, got {other:?}"),
        }
        let detail = explain(&message).unwrap();
        assert!(detail.contains("rsrp_dbm"));
        assert!(detail.contains("-157"));
    }

    #[test]
    fn absent_optionals_are_fine() {
        let mut report = full_report();
        report.satellite.angular_velocity_deg_s = None;
        report.impairments.doppler_rate_hz_s = None;
        report.impairments.rain_attenuation_db = None;
        report.link_budget.required_snr_db = None;
        report.handover.next_satellite_id = None;
        assert!(validate(&IndicationMessage::FullMetrics(report)).is_ok());
    }

    #[test]
    fn control_actions_validate_against_their_tables() {
        assert!(
            validate_control(&ControlAction::PowerControl { power_adjustment_db: 15.0 }).is_ok()
        );
        let err =
            validate_control(&ControlAction::PowerControl { power_adjustment_db: 15.1 })
                .unwrap_err();
        assert!(matches!(err, CodecError::RangeViolation { field: "power_adjustment_db", .. }));

        let err = validate_control(&ControlAction::FadeMitigation {
            scheme: FadeMitigationScheme::PowerBoost,
            duration_sec: 601,
        })
        .unwrap_err();
        assert!(matches!(err, CodecError::RangeViolation { field: "fade_duration_sec", .. }));
    }
}
