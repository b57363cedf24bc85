use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

pub mod ber;
pub mod error;
pub mod logging;
pub mod modulation;
pub mod qos;
pub mod session;
pub mod sweep;

use crate::{
    ber::ber_awgn_array,
    logging::{LogConfig, LogLevel, init_logging},
    modulation::{Modulation, Scheme},
    qos::{QosMetrics, simulate_ber_qos},
    session::{CurveBook, PLOT_LAYOUT, PlotSeries, TableRow},
};

#[inline]
pub fn db(x: f64) -> f64 {
    10f64 * x.log10()
}

#[inline]
pub fn undb(x: f64) -> f64 {
    10f64.powf(x / 10f64)
}

/// `num` evenly spaced values from `start` to `stop`, both included.
#[inline]
pub fn linspace(start: f64, stop: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = if num > 1 {
        (stop - start) / ((num - 1) as f64)
    } else {
        0f64
    };
    (0..num).map(move |i| {
        if i > 0 && i == num - 1 {
            stop
        } else {
            start + step * (i as f64)
        }
    })
}

#[inline]
pub fn erf(x: f64) -> f64 {
    1f64 - erfc(x)
}

/// Complementary error function from a Chebyshev fit, fractional error below
/// 1.2e-7 everywhere. Evaluated directly so small tails keep their precision.
#[inline]
pub fn erfc(x: f64) -> f64 {
    let t: f64 = 1f64 / (1f64 + 0.5 * x.abs());
    let tau = t
        * (-x.powi(2) - 1.26551223
            + 1.00002368 * t
            + 0.37409196 * t.powi(2)
            + 0.09678418 * t.powi(3)
            - 0.18628806 * t.powi(4)
            + 0.27886807 * t.powi(5)
            - 1.13520398 * t.powi(6)
            + 1.48851587 * t.powi(7)
            - 0.82215223 * t.powi(8)
            + 0.17087277 * t.powi(9))
        .exp();
    // The fit overshoots 1 by ~3e-8 right at the origin. `clamp` keeps NaN.
    let tau = tau.clamp(0f64, 1f64);
    if x >= 0f64 { tau } else { 2f64 - tau }
}


#[pyfunction]
#[pyo3(name = "ber_awgn")]
fn ber_awgn_py<'py>(
    py: Python<'py>,
    modulation: &str,
    snr_db: PyReadonlyArray1<'py, f64>,
) -> Bound<'py, PyArray1<f64>> {
    ber_awgn_array(&Scheme::parse(modulation), &snr_db.as_array()).into_pyarray(py)
}

#[pyfunction]
#[pyo3(name = "simulate_ber_qos")]
fn simulate_ber_qos_py<'py>(
    py: Python<'py>,
    modulation: &str,
    snr_db: PyReadonlyArray1<'py, f64>,
) -> (Bound<'py, PyArray1<f64>>, QosMetrics) {
    let snr_db = snr_db.as_array().to_vec();
    let (bers, metrics) = simulate_ber_qos(&Scheme::parse(modulation), &snr_db);
    (bers.into_pyarray(py), metrics)
}

#[pyfunction]
#[pyo3(name = "linspace")]
fn linspace_py(py: Python<'_>, start: f64, stop: f64, num: usize) -> Bound<'_, PyArray1<f64>> {
    PyArray1::from_iter(py, linspace(start, stop, num))
}

#[pyfunction]
fn modulations() -> Vec<&'static str> {
    Modulation::ALL.iter().map(Modulation::name).collect()
}

#[pyfunction]
#[pyo3(name = "init_logging", signature = (level="info", ansi=true))]
fn init_logging_py(level: &str, ansi: bool) -> PyResult<bool> {
    let level: LogLevel = level
        .parse()
        .map_err(pyo3::exceptions::PyValueError::new_err)?;
    Ok(init_logging(&LogConfig { level, ansi }))
}

#[pymodule]
#[pyo3(name = "awgnqos")]
pub fn module_with_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ber_awgn_py, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_ber_qos_py, m)?)?;
    m.add_function(wrap_pyfunction!(linspace_py, m)?)?;
    m.add_function(wrap_pyfunction!(modulations, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    m.add_class::<CurveBook>()?;
    m.add_class::<QosMetrics>()?;
    m.add_class::<PlotSeries>()?;
    m.add_class::<TableRow>()?;
    m.add("PLOT_TITLE", PLOT_LAYOUT.title)?;
    m.add("PLOT_X_LABEL", PLOT_LAYOUT.x_label)?;
    m.add("PLOT_Y_LABEL", PLOT_LAYOUT.y_label)?;
    m.add("PLOT_LAYOUT", PLOT_LAYOUT.to_dict(m.py())?)?;
    m.add("TABLE_COLUMNS", TableRow::COLUMNS.to_vec())?;
    Ok(())
}
