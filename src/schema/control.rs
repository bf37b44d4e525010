//! Control message schema: action discriminants and parameter tables.
//!
//! Control messages share the indication codec's packing primitives but
//! carry a 3-bit action discriminant followed by that action's parameter
//! fields.

use super::FieldSpec;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Parameter field declarations for the control actions.
pub mod params {
    use super::FieldSpec;

    pub const POWER_ADJUSTMENT: FieldSpec =
        FieldSpec::required("power_adjustment_db", -150, 150, 10);
    pub const TARGET_SATELLITE_ID: FieldSpec =
        FieldSpec::required("target_satellite_id", 0, 4095, 1);
    pub const EXECUTION_OFFSET: FieldSpec =
        FieldSpec::required("execution_offset_ms", 0, 10_000, 1);
    pub const FREQUENCY_OFFSET: FieldSpec =
        FieldSpec::required("frequency_offset_hz", -50_000, 50_000, 1);
    pub const TARGET_MCS: FieldSpec = FieldSpec::required("target_mcs", 0, 28, 1);
    pub const TARGET_CQI: FieldSpec = FieldSpec::required("target_cqi", 0, 15, 1);
    pub const TARGET_BEAM_ID: FieldSpec = FieldSpec::required("target_beam_id", 0, 255, 1);
    pub const FADE_SCHEME: FieldSpec = FieldSpec::required("fade_scheme", 0, 2, 1);
    pub const FADE_DURATION: FieldSpec = FieldSpec::required("fade_duration_sec", 0, 600, 1);
}

use params::*;

const POWER_CONTROL: &[FieldSpec] = &[POWER_ADJUSTMENT];
const TRIGGER_HANDOVER: &[FieldSpec] = &[TARGET_SATELLITE_ID, EXECUTION_OFFSET];
const DOPPLER_COMPENSATION: &[FieldSpec] = &[FREQUENCY_OFFSET];
const LINK_ADAPTATION: &[FieldSpec] = &[TARGET_MCS, TARGET_CQI];
const BEAM_SWITCH: &[FieldSpec] = &[TARGET_BEAM_ID];
const FADE_MITIGATION: &[FieldSpec] = &[FADE_SCHEME, FADE_DURATION];

/// The six control action types of the service model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlActionKind {
    PowerControl,
    TriggerHandover,
    DopplerCompensation,
    LinkAdaptation,
    BeamSwitch,
    FadeMitigation,
}

impl ControlActionKind {
    /// Wire discriminant carried in the control message header.
    pub const fn wire_id(self) -> u8 {
        match self {
            ControlActionKind::PowerControl => 0,
            ControlActionKind::TriggerHandover => 1,
            ControlActionKind::DopplerCompensation => 2,
            ControlActionKind::LinkAdaptation => 3,
            ControlActionKind::BeamSwitch => 4,
            ControlActionKind::FadeMitigation => 5,
        }
    }

    /// Resolve a wire discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownAction`] for unrecognized ids.
    pub fn from_wire(id: u8) -> Result<Self> {
        match id {
            0 => Ok(ControlActionKind::PowerControl),
            1 => Ok(ControlActionKind::TriggerHandover),
            2 => Ok(ControlActionKind::DopplerCompensation),
            3 => Ok(ControlActionKind::LinkAdaptation),
            4 => Ok(ControlActionKind::BeamSwitch),
            5 => Ok(ControlActionKind::FadeMitigation),
            other => Err(CodecError::UnknownAction { action: other }),
        }
    }

    /// Ordered parameter table for this action.
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            ControlActionKind::PowerControl => POWER_CONTROL,
            ControlActionKind::TriggerHandover => TRIGGER_HANDOVER,
            ControlActionKind::DopplerCompensation => DOPPLER_COMPENSATION,
            ControlActionKind::LinkAdaptation => LINK_ADAPTATION,
            ControlActionKind::BeamSwitch => BEAM_SWITCH,
            ControlActionKind::FadeMitigation => FADE_MITIGATION,
        }
    }

    /// All action kinds, in wire-id order.
    pub const fn all() -> [ControlActionKind; 6] {
        [
            ControlActionKind::PowerControl,
            ControlActionKind::TriggerHandover,
            ControlActionKind::DopplerCompensation,
            ControlActionKind::LinkAdaptation,
            ControlActionKind::BeamSwitch,
            ControlActionKind::FadeMitigation,
        ]
    }
}
