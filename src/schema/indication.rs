//! Field tables for the indication message formats.
//!
//! Ranges follow the service-model definition: angles carry two decimal
//! places (scale 100), powers and losses one (scale 10), percentages two
//! (scale 100). RSRP/RSRQ/SINR bounds track the 3GPP measurement ranges.

use super::FieldSpec;

/// Individual field declarations, shared across format tables.
pub mod fields {
    use super::FieldSpec;

    // Satellite metrics
    pub const SATELLITE_ID: FieldSpec = FieldSpec::required("satellite_id", 0, 4095, 1);
    pub const ORBIT_TYPE: FieldSpec = FieldSpec::required("orbit_type", 0, 2, 1);
    pub const BEAM_ID: FieldSpec = FieldSpec::required("beam_id", 0, 255, 1);
    pub const ELEVATION_ANGLE: FieldSpec = FieldSpec::required("elevation_angle", 0, 9000, 100);
    pub const AZIMUTH_ANGLE: FieldSpec = FieldSpec::required("azimuth_angle", 0, 36_000, 100);
    pub const SLANT_RANGE: FieldSpec = FieldSpec::required("slant_range_km", 0, 500_000, 10);
    pub const SATELLITE_VELOCITY: FieldSpec =
        FieldSpec::required("satellite_velocity_km_s", 0, 1000, 100);
    pub const ANGULAR_VELOCITY: FieldSpec =
        FieldSpec::optional("angular_velocity_deg_s", 0, 10_000, 1000);

    // Channel quality
    pub const RSRP: FieldSpec = FieldSpec::required("rsrp_dbm", -1560, -310, 10);
    pub const RSRQ: FieldSpec = FieldSpec::required("rsrq_db", -400, 200, 10);
    pub const SINR: FieldSpec = FieldSpec::required("sinr_db", -230, 400, 10);
    pub const BLER: FieldSpec = FieldSpec::required("bler_pct", 0, 10_000, 100);
    pub const CQI: FieldSpec = FieldSpec::required("cqi", 0, 15, 1);

    // NTN impairments
    pub const DOPPLER_SHIFT: FieldSpec =
        FieldSpec::required("doppler_shift_hz", -50_000, 50_000, 1);
    pub const DOPPLER_RATE: FieldSpec =
        FieldSpec::optional("doppler_rate_hz_s", -10_000, 10_000, 10);
    pub const PROPAGATION_DELAY: FieldSpec =
        FieldSpec::required("propagation_delay_ms", 0, 60_000, 100);
    pub const PATH_LOSS: FieldSpec = FieldSpec::required("path_loss_db", 0, 3000, 10);
    pub const RAIN_ATTENUATION: FieldSpec =
        FieldSpec::optional("rain_attenuation_db", 0, 500, 10);
    pub const ATMOSPHERIC_LOSS: FieldSpec =
        FieldSpec::required("atmospheric_loss_db", 0, 100, 10);

    // Link budget
    pub const TX_POWER: FieldSpec = FieldSpec::required("tx_power_dbm", -200, 500, 10);
    pub const RX_POWER: FieldSpec = FieldSpec::required("rx_power_dbm", -1500, 0, 10);
    pub const LINK_MARGIN: FieldSpec = FieldSpec::required("link_margin_db", -500, 500, 10);
    pub const SNR: FieldSpec = FieldSpec::required("snr_db", -300, 600, 10);
    pub const REQUIRED_SNR: FieldSpec = FieldSpec::optional("required_snr_db", -100, 400, 10);

    // Handover prediction
    pub const TIME_TO_HANDOVER: FieldSpec =
        FieldSpec::required("time_to_handover_sec", 0, 300, 1);
    pub const NEXT_SATELLITE_ID: FieldSpec = FieldSpec::optional("next_satellite_id", 0, 4095, 1);
    pub const HANDOVER_PROBABILITY: FieldSpec =
        FieldSpec::required("handover_probability_pct", 0, 10_000, 100);

    // Performance metrics
    pub const THROUGHPUT_DL: FieldSpec =
        FieldSpec::required("throughput_dl_mbps", 0, 100_000, 100);
    pub const THROUGHPUT_UL: FieldSpec =
        FieldSpec::required("throughput_ul_mbps", 0, 100_000, 100);
    pub const LATENCY_RTT: FieldSpec = FieldSpec::required("latency_rtt_ms", 0, 10_000, 10);
    pub const PACKET_LOSS_RATE: FieldSpec =
        FieldSpec::required("packet_loss_rate_pct", 0, 10_000, 100);
}

use fields::*;

/// Format 1: full NTN metrics, all six measurement groups in order.
pub const FULL_METRICS: &[FieldSpec] = &[
    SATELLITE_ID,
    ORBIT_TYPE,
    BEAM_ID,
    ELEVATION_ANGLE,
    AZIMUTH_ANGLE,
    SLANT_RANGE,
    SATELLITE_VELOCITY,
    ANGULAR_VELOCITY,
    RSRP,
    RSRQ,
    SINR,
    BLER,
    CQI,
    DOPPLER_SHIFT,
    DOPPLER_RATE,
    PROPAGATION_DELAY,
    PATH_LOSS,
    RAIN_ATTENUATION,
    ATMOSPHERIC_LOSS,
    TX_POWER,
    RX_POWER,
    LINK_MARGIN,
    SNR,
    REQUIRED_SNR,
    TIME_TO_HANDOVER,
    NEXT_SATELLITE_ID,
    HANDOVER_PROBABILITY,
    THROUGHPUT_DL,
    THROUGHPUT_UL,
    LATENCY_RTT,
    PACKET_LOSS_RATE,
];

/// Format 2: minimal subset for high-rate reporting.
pub const MINIMAL: &[FieldSpec] =
    &[SATELLITE_ID, ELEVATION_ANGLE, RSRP, SINR, DOPPLER_SHIFT, PROPAGATION_DELAY];

/// Format 3: handover preparation. The handover target is mandatory here,
/// unlike in Format 1.
pub const HANDOVER_PREP: &[FieldSpec] = &[
    SATELLITE_ID,
    NEXT_SATELLITE_ID.as_required(),
    TIME_TO_HANDOVER,
    HANDOVER_PROBABILITY,
    ELEVATION_ANGLE,
    RSRP,
];
