//! Shared record constructors for the integration tests.
#![allow(dead_code)]
//!
//! Values sit on exact fixed-point resolution steps so round trips can be
//! asserted with plain equality where the test wants to.

use e2sm_ntn::{
    ChannelQuality, HandoverPrediction, HandoverPrepReport, LinkBudget, MinimalReport,
    NtnImpairments, NtnMetricsReport, OrbitType, PerformanceMetrics, SatelliteMetrics,
};

/// A fully-populated Format 1 record, every optional present.
pub fn full_report() -> NtnMetricsReport {
    NtnMetricsReport {
        satellite: SatelliteMetrics {
            satellite_id: 42,
            orbit_type: OrbitType::Leo,
            beam_id: 7,
            elevation_angle_deg: 45.67,
            azimuth_angle_deg: 182.33,
            slant_range_km: 1234.5,
            velocity_km_s: 7.56,
            angular_velocity_deg_s: Some(0.125),
        },
        channel: ChannelQuality {
            rsrp_dbm: -95.5,
            rsrq_db: -10.5,
            sinr_db: 12.3,
            bler_pct: 1.25,
            cqi: 11,
        },
        impairments: NtnImpairments {
            doppler_shift_hz: -18_400,
            doppler_rate_hz_s: Some(-120.5),
            propagation_delay_ms: 12.39,
            path_loss_db: 165.3,
            rain_attenuation_db: Some(2.5),
            atmospheric_loss_db: 0.7,
        },
        link_budget: LinkBudget {
            tx_power_dbm: 20.5,
            rx_power_dbm: -98.7,
            link_margin_db: 3.2,
            snr_db: 15.4,
            required_snr_db: Some(9.5),
        },
        handover: HandoverPrediction {
            time_to_handover_sec: 120,
            next_satellite_id: Some(43),
            handover_probability_pct: 87.5,
        },
        performance: PerformanceMetrics {
            throughput_dl_mbps: 150.25,
            throughput_ul_mbps: 25.5,
            latency_rtt_ms: 28.4,
            packet_loss_rate_pct: 0.02,
        },
    }
}

/// The same serving satellite as [`full_report`], with every optional absent.
pub fn full_report_no_optionals() -> NtnMetricsReport {
    let mut report = full_report();
    report.satellite.angular_velocity_deg_s = None;
    report.impairments.doppler_rate_hz_s = None;
    report.impairments.rain_attenuation_db = None;
    report.link_budget.required_snr_db = None;
    report.handover.next_satellite_id = None;
    report
}

/// A Format 2 record matching the serving satellite of [`full_report`].
pub fn minimal_report() -> MinimalReport {
    MinimalReport {
        satellite_id: 42,
        elevation_angle_deg: 45.67,
        rsrp_dbm: -95.5,
        sinr_db: 12.3,
        doppler_shift_hz: -18_400,
        propagation_delay_ms: 12.39,
    }
}

/// A Format 3 record for an imminent handover.
pub fn handover_prep_report() -> HandoverPrepReport {
    HandoverPrepReport {
        satellite_id: 42,
        next_satellite_id: 43,
        time_to_handover_sec: 45,
        handover_probability_pct: 92.25,
        elevation_angle_deg: 12.5,
        rsrp_dbm: -101.2,
    }
}
