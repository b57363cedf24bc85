//! Textbook forms of the same approximations, written against the Gaussian
//! Q-function instead of `erfc`.
use awgnqos::{erfc, modulation::Modulation};
use std::f64::consts::PI;

pub fn q(x: f64) -> f64 {
    0.5 * erfc(x / 2f64.sqrt())
}

pub fn ber_reference(modulation: Modulation, snr: f64) -> f64 {
    match modulation {
        Modulation::Bpsk => q((2f64 * snr).sqrt()),
        Modulation::Qpsk => q(snr.sqrt()),
        Modulation::Psk8 => 2f64 * q((2f64 * snr).sqrt() * (PI / 8f64).sin()),
        Modulation::Qam16 => 0.75 * q((0.8 * snr).sqrt()),
        Modulation::Qam64 => (7f64 / 12f64) * q((snr * 4f64 / 7f64).sqrt()),
        Modulation::Qam256 => (15f64 / 32f64) * q((snr * 32f64 / 85f64).sqrt()),
    }
}
