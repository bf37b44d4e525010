//! Codec statistics tracking.
//!
//! Each codec instance owns a [`StatsTracker`] by default, so separate
//! instances never share counters. Callers that want one aggregate view
//! across several codecs (or several worker threads) construct a tracker
//! themselves and hand the same `Arc` to each instance.
//!
//! Updates are mutex-guarded; [`StatsTracker`] is safe to share across
//! threads. [`StatsSnapshot`] is a plain value detached from the tracker.

use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
struct StatsInner {
    encodes: u64,
    decodes: u64,
    encode_errors: u64,
    decode_errors: u64,
    encoded_bytes_total: u64,
    decoded_bytes_total: u64,
    min_encoded_bytes: Option<u64>,
    max_encoded_bytes: Option<u64>,
    encode_nanos_total: u64,
    decode_nanos_total: u64,
}

/// Running aggregate of encode/decode activity.
#[derive(Debug, Default)]
pub struct StatsTracker {
    inner: Mutex<StatsInner>,
}

impl StatsTracker {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, StatsInner> {
        // A poisoned lock only means another caller panicked mid-update;
        // the counters themselves are still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a successful encode of `bytes` taking `elapsed`.
    pub fn record_encode(&self, bytes: usize, elapsed: Duration) {
        let mut inner = self.locked();
        inner.encodes += 1;
        inner.encoded_bytes_total += bytes as u64;
        inner.min_encoded_bytes =
            Some(inner.min_encoded_bytes.map_or(bytes as u64, |m| m.min(bytes as u64)));
        inner.max_encoded_bytes =
            Some(inner.max_encoded_bytes.map_or(bytes as u64, |m| m.max(bytes as u64)));
        inner.encode_nanos_total =
            inner.encode_nanos_total.saturating_add(elapsed.as_nanos() as u64);
    }

    /// Record a successful decode of `bytes` taking `elapsed`.
    pub fn record_decode(&self, bytes: usize, elapsed: Duration) {
        let mut inner = self.locked();
        inner.decodes += 1;
        inner.decoded_bytes_total += bytes as u64;
        inner.decode_nanos_total =
            inner.decode_nanos_total.saturating_add(elapsed.as_nanos() as u64);
    }

    /// Record a failed encode.
    pub fn record_encode_error(&self) {
        self.locked().encode_errors += 1;
    }

    /// Record a failed decode.
    pub fn record_decode_error(&self) {
        self.locked().decode_errors += 1;
    }

    /// Take a consistent snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.locked();
        StatsSnapshot {
            encodes: inner.encodes,
            decodes: inner.decodes,
            encode_errors: inner.encode_errors,
            decode_errors: inner.decode_errors,
            encoded_bytes_total: inner.encoded_bytes_total,
            decoded_bytes_total: inner.decoded_bytes_total,
            min_encoded_bytes: inner.min_encoded_bytes,
            max_encoded_bytes: inner.max_encoded_bytes,
            mean_encoded_bytes: if inner.encodes == 0 {
                0.0
            } else {
                inner.encoded_bytes_total as f64 / inner.encodes as f64
            },
            mean_encode_latency: mean_latency(inner.encode_nanos_total, inner.encodes),
            mean_decode_latency: mean_latency(inner.decode_nanos_total, inner.decodes),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        *self.locked() = StatsInner::default();
    }
}

fn mean_latency(nanos_total: u64, count: u64) -> Duration {
    if count == 0 { Duration::ZERO } else { Duration::from_nanos(nanos_total / count) }
}

/// Point-in-time view of a [`StatsTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub encodes: u64,
    pub decodes: u64,
    pub encode_errors: u64,
    pub decode_errors: u64,
    pub encoded_bytes_total: u64,
    pub decoded_bytes_total: u64,
    pub min_encoded_bytes: Option<u64>,
    pub max_encoded_bytes: Option<u64>,
    pub mean_encoded_bytes: f64,
    pub mean_encode_latency: Duration,
    pub mean_decode_latency: Duration,
}
