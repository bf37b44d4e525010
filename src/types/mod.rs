//! Record types for E2SM-NTN messages.
//!
//! Measurement and control records are explicit, schema-validated structs
//! rather than loosely-typed maps: a required field that is missing is a
//! construction-time problem, not a surprise at encode time. Optional
//! fields are `Option`s and come back from the decoder as `None` when
//! their presence bit was unset, never as zero.
//!
//! The structs mirror the field tables in [`crate::schema`]; the
//! `field_values` / `from_field_values` adapters flatten each record into
//! schema order so a single packing engine serves every format.

mod control;
mod measurement;

pub use control::{ControlAction, FadeMitigationScheme};
pub use measurement::{
    ChannelQuality, HandoverPrediction, HandoverPrepReport, IndicationMessage, LinkBudget,
    MinimalReport, NtnImpairments, NtnMetricsReport, OrbitType, PerformanceMetrics,
    SatelliteMetrics,
};

use crate::error::{CodecError, Result};

/// Cursor over a flattened value list, consumed in schema order.
pub(crate) struct FieldValues<'a> {
    iter: std::slice::Iter<'a, Option<f64>>,
}

impl<'a> FieldValues<'a> {
    pub(crate) fn new(values: &'a [Option<f64>]) -> Self {
        Self { iter: values.iter() }
    }

    /// Take the next value, failing if it is absent.
    pub(crate) fn required(&mut self, name: &'static str) -> Result<f64> {
        self.iter.next().copied().flatten().ok_or_else(|| CodecError::missing_field(name))
    }

    /// Take the next value, which may be absent.
    pub(crate) fn optional(&mut self) -> Option<f64> {
        self.iter.next().copied().flatten()
    }
}
