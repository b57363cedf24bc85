use ndarray::{Array1, ArrayView1};
use tracing::debug;

use crate::{modulation::Scheme, undb};

/// Theoretical AWGN bit-error rate at each SNR (in dB) of the input.
pub fn ber_curve<'a, I: Iterator<Item = f64> + 'a>(
    scheme: &'a Scheme,
    snrs_db: I,
) -> impl Iterator<Item = f64> + 'a {
    snrs_db.map(move |snr_db| scheme.ber(undb(snr_db)))
}

pub fn ber_awgn(scheme: &Scheme, snrs_db: &[f64]) -> Vec<f64> {
    debug!(%scheme, points = snrs_db.len(), "evaluating BER");
    ber_curve(scheme, snrs_db.iter().cloned()).collect()
}

pub fn ber_awgn_array(scheme: &Scheme, snrs_db: &ArrayView1<f64>) -> Array1<f64> {
    debug!(%scheme, points = snrs_db.len(), "evaluating BER");
    snrs_db.mapv(|snr_db| scheme.ber(undb(snr_db)))
}
