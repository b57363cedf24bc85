#![allow(dead_code, unused_macros)]
pub mod ber;

#[macro_export]
macro_rules! bers {
    ($scheme:expr, $snrs_db:expr) => {
        awgnqos::ber::ber_awgn(&$scheme, &$snrs_db)
    };
}

pub fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / v.len() as f64
}
