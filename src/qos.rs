use itertools::Itertools;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ber::ber_awgn, modulation::Scheme};

/// Fixed channel assumptions the QoS proxies are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelParams {
    pub bit_rate_hz: f64,
    pub bandwidth_hz: f64,
}

impl Default for ChannelParams {
    fn default() -> Self {
        Self {
            bit_rate_hz: 1e6,
            bandwidth_hz: 1e6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QosPoint {
    pub ber: f64,
    pub throughput_mbps: f64,
    pub delay_ms: f64,
    pub spectral_efficiency: f64,
}

impl QosPoint {
    /// A BER of exactly 1 yields zero throughput and an infinite delay.
    pub fn from_ber(ber: f64, params: &ChannelParams) -> Self {
        let throughput_mbps = (1f64 - ber) * params.bit_rate_hz / 1e6;
        Self {
            ber,
            throughput_mbps,
            delay_ms: (1f64 / (throughput_mbps * 1e6)) * 1e3,
            spectral_efficiency: params.bit_rate_hz / params.bandwidth_hz * (1f64 - ber),
        }
    }
}

/// Averages over one curve.
#[pyclass(frozen, get_all)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QosMetrics {
    pub avg_ber: f64,
    pub avg_throughput_mbps: f64,
    pub avg_delay_ms: f64,
    pub avg_spectral_efficiency: f64,
}

impl QosMetrics {
    pub const COLUMNS: [&'static str; 4] = [
        "Avg BER",
        "Throughput (Mbps)",
        "Delay (ms)",
        "Spectral Eff (bits/s/Hz)",
    ];

    /// The mean of an empty set of points is NaN in every field.
    pub fn from_points(points: &[QosPoint]) -> Self {
        let (bers, throughputs, delays, effs): (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) = points
            .iter()
            .map(|p| (p.ber, p.throughput_mbps, p.delay_ms, p.spectral_efficiency))
            .multiunzip();

        Self {
            avg_ber: mean(&bers),
            avg_throughput_mbps: mean(&throughputs),
            avg_delay_ms: mean(&delays),
            avg_spectral_efficiency: mean(&effs),
        }
    }

    pub fn values(&self) -> [f64; 4] {
        [
            self.avg_ber,
            self.avg_throughput_mbps,
            self.avg_delay_ms,
            self.avg_spectral_efficiency,
        ]
    }
}

#[pymethods]
impl QosMetrics {
    fn __repr__(&self) -> String {
        format!(
            "QosMetrics(avg_ber={}, avg_throughput_mbps={}, avg_delay_ms={}, avg_spectral_efficiency={})",
            self.avg_ber, self.avg_throughput_mbps, self.avg_delay_ms, self.avg_spectral_efficiency
        )
    }
}

#[inline]
fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}

pub fn qos_points(bers: &[f64], params: &ChannelParams) -> Vec<QosPoint> {
    bers.iter().map(|&ber| QosPoint::from_ber(ber, params)).collect()
}

pub fn simulate_ber_qos(scheme: &Scheme, snrs_db: &[f64]) -> (Vec<f64>, QosMetrics) {
    simulate_ber_qos_with(scheme, snrs_db, &ChannelParams::default())
}

pub fn simulate_ber_qos_with(
    scheme: &Scheme,
    snrs_db: &[f64],
    params: &ChannelParams,
) -> (Vec<f64>, QosMetrics) {
    let bers = ber_awgn(scheme, snrs_db);
    let metrics = QosMetrics::from_points(&qos_points(&bers, params));

    if metrics.avg_delay_ms.is_infinite() {
        warn!(%scheme, "BER reached 1, average delay is infinite");
    }
    debug!(%scheme, ?metrics, "aggregated QoS");

    (bers, metrics)
}
