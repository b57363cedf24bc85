use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::InputError,
    modulation::Scheme,
    qos::{ChannelParams, QosMetrics, simulate_ber_qos_with},
    sweep::SnrSweep,
};

/// Fixed chrome of the BER plot. A reset restores exactly this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotLayout {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub log_y: bool,
    pub grid: bool,
}

impl PlotLayout {
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("title", self.title)?;
        dict.set_item("x_label", self.x_label)?;
        dict.set_item("y_label", self.y_label)?;
        dict.set_item("log_y", self.log_y)?;
        dict.set_item("grid", self.grid)?;
        Ok(dict)
    }
}

pub const PLOT_LAYOUT: PlotLayout = PlotLayout {
    title: "BER vs SNR (AWGN)",
    x_label: "SNR (dB)",
    y_label: "BER",
    log_y: true,
    grid: true,
};

/// The fields of an "add curve" action, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveRequest {
    pub modulation: String,
    pub name: String,
    pub snr_start: String,
    pub snr_end: String,
    pub points: String,
}

impl Default for CurveRequest {
    fn default() -> Self {
        Self {
            modulation: String::from("BPSK"),
            name: String::from("Curve"),
            snr_start: String::from("0"),
            snr_end: String::from("5"),
            points: String::from("5"),
        }
    }
}

#[pyclass(frozen, get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: String,
}

#[pyclass(frozen, get_all)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: String,
    pub modulation: String,
    pub avg_ber: f64,
    pub avg_throughput_mbps: f64,
    pub avg_delay_ms: f64,
    pub avg_spectral_efficiency: f64,
}

impl TableRow {
    pub const COLUMNS: [&'static str; 6] = [
        "Curve",
        "Modulation",
        QosMetrics::COLUMNS[0],
        QosMetrics::COLUMNS[1],
        QosMetrics::COLUMNS[2],
        QosMetrics::COLUMNS[3],
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub name: String,
    pub scheme: Scheme,
    pub snr_db: Vec<f64>,
    pub ber: Vec<f64>,
    pub metrics: QosMetrics,
}

impl Curve {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.scheme)
    }

    pub fn plot_series(&self) -> PlotSeries {
        PlotSeries {
            x: self.snr_db.clone(),
            y: self.ber.clone(),
            label: self.label(),
        }
    }

    pub fn table_row(&self) -> TableRow {
        TableRow {
            name: self.name.clone(),
            modulation: self.scheme.to_string(),
            avg_ber: self.metrics.avg_ber,
            avg_throughput_mbps: self.metrics.avg_throughput_mbps,
            avg_delay_ms: self.metrics.avg_delay_ms,
            avg_spectral_efficiency: self.metrics.avg_spectral_efficiency,
        }
    }
}

/// Every curve currently on the plot and in the table, in insertion order.
#[pyclass]
#[derive(Debug, Clone, Default)]
pub struct CurveBook {
    curves: Vec<Curve>,
    params: ChannelParams,
}

impl CurveBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: ChannelParams) -> Self {
        Self {
            curves: Vec::new(),
            params,
        }
    }

    /// Validates the request, then evaluates and appends one curve. Nothing is
    /// appended when validation fails.
    pub fn add_curve(&mut self, request: &CurveRequest) -> Result<&Curve, InputError> {
        let sweep = SnrSweep::parse(&request.snr_start, &request.snr_end, &request.points)
            .inspect_err(|err| warn!(curve = %request.name, %err, "curve rejected"))?;
        let scheme = Scheme::parse(&request.modulation);
        Ok(self.add_sweep(&request.name, scheme, &sweep))
    }

    pub fn add_sweep(&mut self, name: &str, scheme: Scheme, sweep: &SnrSweep) -> &Curve {
        let snr_db = sweep.values();
        let (ber, metrics) = simulate_ber_qos_with(&scheme, &snr_db, &self.params);

        info!(
            curve = name,
            %scheme,
            points = snr_db.len(),
            avg_ber = metrics.avg_ber,
            "curve added"
        );

        let idx = self.curves.len();
        self.curves.push(Curve {
            name: name.to_string(),
            scheme,
            snr_db,
            ber,
            metrics,
        });
        &self.curves[idx]
    }

    /// Removes every curve. Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.curves.len();
        self.curves.clear();
        info!(removed, "curves cleared");
        removed
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn params(&self) -> &ChannelParams {
        &self.params
    }

    pub fn layout(&self) -> PlotLayout {
        PLOT_LAYOUT
    }

    pub fn series(&self) -> Vec<PlotSeries> {
        self.curves.iter().map(Curve::plot_series).collect()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.curves.iter().map(Curve::table_row).collect()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[pymethods]
impl CurveBook {
    #[new]
    #[pyo3(signature = (bit_rate_hz=1e6, bandwidth_hz=1e6))]
    fn py_new(bit_rate_hz: f64, bandwidth_hz: f64) -> Self {
        Self::with_params(ChannelParams {
            bit_rate_hz,
            bandwidth_hz,
        })
    }

    /// Add one curve from the raw form fields; raises `ValueError` on bad input.
    #[pyo3(name = "add_curve", signature = (modulation, name, snr_start, snr_end, points))]
    fn py_add_curve(
        &mut self,
        modulation: String,
        name: String,
        snr_start: String,
        snr_end: String,
        points: String,
    ) -> PyResult<(PlotSeries, TableRow)> {
        let request = CurveRequest {
            modulation,
            name,
            snr_start,
            snr_end,
            points,
        };
        let curve = self.add_curve(&request)?;
        Ok((curve.plot_series(), curve.table_row()))
    }

    #[pyo3(name = "clear")]
    fn py_clear(&mut self) -> usize {
        self.clear()
    }

    #[pyo3(name = "series")]
    fn py_series(&self) -> Vec<PlotSeries> {
        self.series()
    }

    #[pyo3(name = "rows")]
    fn py_rows(&self) -> Vec<TableRow> {
        self.rows()
    }

    /// Axes settings to restore after `clear`.
    #[pyo3(name = "layout")]
    fn py_layout<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        self.layout().to_dict(py)
    }

    fn __len__(&self) -> usize {
        self.len()
    }
}
