//! Control action records.

use serde::{Deserialize, Serialize};

use super::FieldValues;
use crate::error::{CodecError, Result};
use crate::schema::ControlActionKind;

/// Fade mitigation schemes selectable by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FadeMitigationScheme {
    /// Temporary uplink power boost
    PowerBoost,
    /// Switch to a diversity path
    SpatialDiversity,
    /// Drop to a more robust modulation/coding scheme
    AdaptiveCoding,
}

impl FadeMitigationScheme {
    const fn index(self) -> u8 {
        match self {
            FadeMitigationScheme::PowerBoost => 0,
            FadeMitigationScheme::SpatialDiversity => 1,
            FadeMitigationScheme::AdaptiveCoding => 2,
        }
    }

    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(FadeMitigationScheme::PowerBoost),
            1 => Some(FadeMitigationScheme::SpatialDiversity),
            2 => Some(FadeMitigationScheme::AdaptiveCoding),
            _ => None,
        }
    }
}

/// A control message: one action type plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlAction {
    /// Adjust transmit power by the given delta
    PowerControl { power_adjustment_db: f64 },
    /// Hand the UE over to the named satellite
    TriggerHandover { target_satellite_id: u16, execution_offset_ms: u16 },
    /// Pre-compensate the carrier by the given frequency offset
    DopplerCompensation { frequency_offset_hz: i32 },
    /// Retune modulation and coding
    LinkAdaptation { target_mcs: u8, target_cqi: u8 },
    /// Switch the serving beam
    BeamSwitch { target_beam_id: u8 },
    /// Activate a fade mitigation scheme for a bounded duration
    FadeMitigation { scheme: FadeMitigationScheme, duration_sec: u16 },
}

impl ControlAction {
    /// The schema kind of this action.
    pub const fn kind(&self) -> ControlActionKind {
        match self {
            ControlAction::PowerControl { .. } => ControlActionKind::PowerControl,
            ControlAction::TriggerHandover { .. } => ControlActionKind::TriggerHandover,
            ControlAction::DopplerCompensation { .. } => ControlActionKind::DopplerCompensation,
            ControlAction::LinkAdaptation { .. } => ControlActionKind::LinkAdaptation,
            ControlAction::BeamSwitch { .. } => ControlActionKind::BeamSwitch,
            ControlAction::FadeMitigation { .. } => ControlActionKind::FadeMitigation,
        }
    }

    /// Flatten the parameters into semantic values, in schema order.
    pub(crate) fn field_values(&self) -> Vec<Option<f64>> {
        match *self {
            ControlAction::PowerControl { power_adjustment_db } => {
                vec![Some(power_adjustment_db)]
            }
            ControlAction::TriggerHandover { target_satellite_id, execution_offset_ms } => {
                vec![Some(target_satellite_id as f64), Some(execution_offset_ms as f64)]
            }
            ControlAction::DopplerCompensation { frequency_offset_hz } => {
                vec![Some(frequency_offset_hz as f64)]
            }
            ControlAction::LinkAdaptation { target_mcs, target_cqi } => {
                vec![Some(target_mcs as f64), Some(target_cqi as f64)]
            }
            ControlAction::BeamSwitch { target_beam_id } => {
                vec![Some(target_beam_id as f64)]
            }
            ControlAction::FadeMitigation { scheme, duration_sec } => {
                vec![Some(scheme.index() as f64), Some(duration_sec as f64)]
            }
        }
    }

    /// Rebuild an action from semantic values in schema order.
    pub(crate) fn from_field_values(
        kind: ControlActionKind,
        values: &[Option<f64>],
    ) -> Result<Self> {
        let mut v = FieldValues::new(values);
        match kind {
            ControlActionKind::PowerControl => Ok(ControlAction::PowerControl {
                power_adjustment_db: v.required("power_adjustment_db")?,
            }),
            ControlActionKind::TriggerHandover => Ok(ControlAction::TriggerHandover {
                target_satellite_id: v.required("target_satellite_id")? as u16,
                execution_offset_ms: v.required("execution_offset_ms")? as u16,
            }),
            ControlActionKind::DopplerCompensation => Ok(ControlAction::DopplerCompensation {
                frequency_offset_hz: v.required("frequency_offset_hz")? as i32,
            }),
            ControlActionKind::LinkAdaptation => Ok(ControlAction::LinkAdaptation {
                target_mcs: v.required("target_mcs")? as u8,
                target_cqi: v.required("target_cqi")? as u8,
            }),
            ControlActionKind::BeamSwitch => Ok(ControlAction::BeamSwitch {
                target_beam_id: v.required("target_beam_id")? as u8,
            }),
            ControlActionKind::FadeMitigation => {
                let index = v.required("fade_scheme")?;
                let scheme = FadeMitigationScheme::from_index(index as u8).ok_or_else(|| {
                    CodecError::decode_validation("fade_scheme", index, 0.0, 2.0)
                })?;
                Ok(ControlAction::FadeMitigation {
                    scheme,
                    duration_sec: v.required("fade_duration_sec")? as u16,
                })
            }
        }
    }
}
