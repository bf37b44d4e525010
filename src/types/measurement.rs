//! Measurement record types for the indication formats.

use serde::{Deserialize, Serialize};

use super::FieldValues;
use crate::error::{CodecError, Result};
use crate::schema::MessageFormat;

/// Orbit regime of the serving satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitType {
    /// Low Earth Orbit, altitude 300-2000 km
    Leo,
    /// Medium Earth Orbit, altitude 2000-35786 km
    Meo,
    /// Geostationary Earth Orbit, altitude ~35786 km
    Geo,
}

impl OrbitType {
    /// Wire index of this orbit type.
    pub const fn index(self) -> u8 {
        match self {
            OrbitType::Leo => 0,
            OrbitType::Meo => 1,
            OrbitType::Geo => 2,
        }
    }

    /// Resolve a wire index.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(OrbitType::Leo),
            1 => Some(OrbitType::Meo),
            2 => Some(OrbitType::Geo),
            _ => None,
        }
    }
}

/// Serving-satellite geometry and motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteMetrics {
    pub satellite_id: u16,
    pub orbit_type: OrbitType,
    pub beam_id: u8,
    /// Elevation above the horizon, degrees (0-90, resolution 0.01)
    pub elevation_angle_deg: f64,
    /// Azimuth from true north, degrees (0-360, resolution 0.01)
    pub azimuth_angle_deg: f64,
    /// Slant range to the satellite, km (resolution 0.1)
    pub slant_range_km: f64,
    /// Orbital velocity, km/s (resolution 0.01)
    pub velocity_km_s: f64,
    /// Apparent angular velocity, deg/s (resolution 0.001)
    pub angular_velocity_deg_s: Option<f64>,
}

/// Radio channel quality measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelQuality {
    /// Reference signal received power, dBm (resolution 0.1)
    pub rsrp_dbm: f64,
    /// Reference signal received quality, dB (resolution 0.1)
    pub rsrq_db: f64,
    /// Signal to interference plus noise ratio, dB (resolution 0.1)
    pub sinr_db: f64,
    /// Block error rate, percent (resolution 0.01)
    pub bler_pct: f64,
    /// Channel quality indicator (0-15)
    pub cqi: u8,
}

/// Impairments specific to the non-terrestrial link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NtnImpairments {
    /// Doppler shift, Hz (whole hertz)
    pub doppler_shift_hz: i32,
    /// Doppler rate, Hz/s (resolution 0.1)
    pub doppler_rate_hz_s: Option<f64>,
    /// One-way propagation delay, ms (resolution 0.01)
    pub propagation_delay_ms: f64,
    /// Free-space path loss, dB (resolution 0.1)
    pub path_loss_db: f64,
    /// Rain attenuation, dB (resolution 0.1)
    pub rain_attenuation_db: Option<f64>,
    /// Atmospheric loss, dB (resolution 0.1)
    pub atmospheric_loss_db: f64,
}

/// Link budget terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkBudget {
    /// Transmit power, dBm (resolution 0.1)
    pub tx_power_dbm: f64,
    /// Received power, dBm (resolution 0.1)
    pub rx_power_dbm: f64,
    /// Link margin, dB (resolution 0.1)
    pub link_margin_db: f64,
    /// Signal to noise ratio, dB (resolution 0.1)
    pub snr_db: f64,
    /// SNR required by the current modulation/coding, dB (resolution 0.1)
    pub required_snr_db: Option<f64>,
}

/// Handover prediction outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoverPrediction {
    /// Predicted time until handover, whole seconds (0-300)
    pub time_to_handover_sec: u16,
    /// Predicted target satellite, when one has been selected
    pub next_satellite_id: Option<u16>,
    /// Handover probability, percent (resolution 0.01)
    pub handover_probability_pct: f64,
}

/// End-to-end performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Downlink throughput, Mbps (resolution 0.01)
    pub throughput_dl_mbps: f64,
    /// Uplink throughput, Mbps (resolution 0.01)
    pub throughput_ul_mbps: f64,
    /// Round-trip latency, ms (resolution 0.1)
    pub latency_rtt_ms: f64,
    /// Packet loss rate, percent (resolution 0.01)
    pub packet_loss_rate_pct: f64,
}

/// Format 1: the full NTN metrics record, six measurement groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NtnMetricsReport {
    pub satellite: SatelliteMetrics,
    pub channel: ChannelQuality,
    pub impairments: NtnImpairments,
    pub link_budget: LinkBudget,
    pub handover: HandoverPrediction,
    pub performance: PerformanceMetrics,
}

/// Format 2: minimal subset for high-rate reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalReport {
    pub satellite_id: u16,
    pub elevation_angle_deg: f64,
    pub rsrp_dbm: f64,
    pub sinr_db: f64,
    pub doppler_shift_hz: i32,
    pub propagation_delay_ms: f64,
}

/// Format 3: handover preparation. The target satellite is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoverPrepReport {
    pub satellite_id: u16,
    pub next_satellite_id: u16,
    pub time_to_handover_sec: u16,
    pub handover_probability_pct: f64,
    pub elevation_angle_deg: f64,
    pub rsrp_dbm: f64,
}

/// An indication message of any supported format.
///
/// The variant fixes the wire format; [`IndicationMessage::format`] is
/// what the encoder stamps into the 2-bit header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndicationMessage {
    FullMetrics(NtnMetricsReport),
    Minimal(MinimalReport),
    HandoverPrep(HandoverPrepReport),
}

impl IndicationMessage {
    /// The wire format of this message.
    pub fn format(&self) -> MessageFormat {
        match self {
            IndicationMessage::FullMetrics(_) => MessageFormat::FullMetrics,
            IndicationMessage::Minimal(_) => MessageFormat::Minimal,
            IndicationMessage::HandoverPrep(_) => MessageFormat::HandoverPrep,
        }
    }

    /// Flatten the record into semantic values, in schema field order.
    pub(crate) fn field_values(&self) -> Vec<Option<f64>> {
        match self {
            IndicationMessage::FullMetrics(r) => r.field_values(),
            IndicationMessage::Minimal(r) => r.field_values(),
            IndicationMessage::HandoverPrep(r) => r.field_values(),
        }
    }

    /// Rebuild a record from semantic values in schema field order.
    pub(crate) fn from_field_values(
        format: MessageFormat,
        values: &[Option<f64>],
    ) -> Result<Self> {
        match format {
            MessageFormat::FullMetrics => {
                NtnMetricsReport::from_field_values(values).map(IndicationMessage::FullMetrics)
            }
            MessageFormat::Minimal => {
                MinimalReport::from_field_values(values).map(IndicationMessage::Minimal)
            }
            MessageFormat::HandoverPrep => {
                HandoverPrepReport::from_field_values(values).map(IndicationMessage::HandoverPrep)
            }
        }
    }
}

impl NtnMetricsReport {
    fn field_values(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.satellite.satellite_id as f64),
            Some(self.satellite.orbit_type.index() as f64),
            Some(self.satellite.beam_id as f64),
            Some(self.satellite.elevation_angle_deg),
            Some(self.satellite.azimuth_angle_deg),
            Some(self.satellite.slant_range_km),
            Some(self.satellite.velocity_km_s),
            self.satellite.angular_velocity_deg_s,
            Some(self.channel.rsrp_dbm),
            Some(self.channel.rsrq_db),
            Some(self.channel.sinr_db),
            Some(self.channel.bler_pct),
            Some(self.channel.cqi as f64),
            Some(self.impairments.doppler_shift_hz as f64),
            self.impairments.doppler_rate_hz_s,
            Some(self.impairments.propagation_delay_ms),
            Some(self.impairments.path_loss_db),
            self.impairments.rain_attenuation_db,
            Some(self.impairments.atmospheric_loss_db),
            Some(self.link_budget.tx_power_dbm),
            Some(self.link_budget.rx_power_dbm),
            Some(self.link_budget.link_margin_db),
            Some(self.link_budget.snr_db),
            self.link_budget.required_snr_db,
            Some(self.handover.time_to_handover_sec as f64),
            self.handover.next_satellite_id.map(|id| id as f64),
            Some(self.handover.handover_probability_pct),
            Some(self.performance.throughput_dl_mbps),
            Some(self.performance.throughput_ul_mbps),
            Some(self.performance.latency_rtt_ms),
            Some(self.performance.packet_loss_rate_pct),
        ]
    }

    fn from_field_values(values: &[Option<f64>]) -> Result<Self> {
        let mut v = FieldValues::new(values);

        let satellite = SatelliteMetrics {
            satellite_id: v.required("satellite_id")? as u16,
            orbit_type: {
                let index = v.required("orbit_type")?;
                OrbitType::from_index(index as u8)
                    .ok_or_else(|| CodecError::decode_validation("orbit_type", index, 0.0, 2.0))?
            },
            beam_id: v.required("beam_id")? as u8,
            elevation_angle_deg: v.required("elevation_angle")?,
            azimuth_angle_deg: v.required("azimuth_angle")?,
            slant_range_km: v.required("slant_range_km")?,
            velocity_km_s: v.required("satellite_velocity_km_s")?,
            angular_velocity_deg_s: v.optional(),
        };
        let channel = ChannelQuality {
            rsrp_dbm: v.required("rsrp_dbm")?,
            rsrq_db: v.required("rsrq_db")?,
            sinr_db: v.required("sinr_db")?,
            bler_pct: v.required("bler_pct")?,
            cqi: v.required("cqi")? as u8,
        };
        let impairments = NtnImpairments {
            doppler_shift_hz: v.required("doppler_shift_hz")? as i32,
            doppler_rate_hz_s: v.optional(),
            propagation_delay_ms: v.required("propagation_delay_ms")?,
            path_loss_db: v.required("path_loss_db")?,
            rain_attenuation_db: v.optional(),
            atmospheric_loss_db: v.required("atmospheric_loss_db")?,
        };
        let link_budget = LinkBudget {
            tx_power_dbm: v.required("tx_power_dbm")?,
            rx_power_dbm: v.required("rx_power_dbm")?,
            link_margin_db: v.required("link_margin_db")?,
            snr_db: v.required("snr_db")?,
            required_snr_db: v.optional(),
        };
        let handover = HandoverPrediction {
            time_to_handover_sec: v.required("time_to_handover_sec")? as u16,
            next_satellite_id: v.optional().map(|id| id as u16),
            handover_probability_pct: v.required("handover_probability_pct")?,
        };
        let performance = PerformanceMetrics {
            throughput_dl_mbps: v.required("throughput_dl_mbps")?,
            throughput_ul_mbps: v.required("throughput_ul_mbps")?,
            latency_rtt_ms: v.required("latency_rtt_ms")?,
            packet_loss_rate_pct: v.required("packet_loss_rate_pct")?,
        };

        Ok(Self { satellite, channel, impairments, link_budget, handover, performance })
    }
}

impl MinimalReport {
    fn field_values(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.satellite_id as f64),
            Some(self.elevation_angle_deg),
            Some(self.rsrp_dbm),
            Some(self.sinr_db),
            Some(self.doppler_shift_hz as f64),
            Some(self.propagation_delay_ms),
        ]
    }

    fn from_field_values(values: &[Option<f64>]) -> Result<Self> {
        let mut v = FieldValues::new(values);
        Ok(Self {
            satellite_id: v.required("satellite_id")? as u16,
            elevation_angle_deg: v.required("elevation_angle")?,
            rsrp_dbm: v.required("rsrp_dbm")?,
            sinr_db: v.required("sinr_db")?,
            doppler_shift_hz: v.required("doppler_shift_hz")? as i32,
            propagation_delay_ms: v.required("propagation_delay_ms")?,
        })
    }
}

impl HandoverPrepReport {
    fn field_values(&self) -> Vec<Option<f64>> {
        vec![
            Some(self.satellite_id as f64),
            Some(self.next_satellite_id as f64),
            Some(self.time_to_handover_sec as f64),
            Some(self.handover_probability_pct),
            Some(self.elevation_angle_deg),
            Some(self.rsrp_dbm),
        ]
    }

    fn from_field_values(values: &[Option<f64>]) -> Result<Self> {
        let mut v = FieldValues::new(values);
        Ok(Self {
            satellite_id: v.required("satellite_id")? as u16,
            next_satellite_id: v.required("next_satellite_id")? as u16,
            time_to_handover_sec: v.required("time_to_handover_sec")? as u16,
            handover_probability_pct: v.required("handover_probability_pct")?,
            elevation_angle_deg: v.required("elevation_angle")?,
            rsrp_dbm: v.required("rsrp_dbm")?,
        })
    }
}
