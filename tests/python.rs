use awgnqos::{
    module_with_functions,
    modulation::{Modulation, Scheme},
    qos::simulate_ber_qos,
};
use numpy::{PyArray1, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

macro_rules! with_module {
    (|$py:ident, $m:ident| $body:block) => {
        Python::with_gil(|$py| {
            let $m = PyModule::new($py, "awgnqos").unwrap();
            module_with_functions(&$m).unwrap();
            $body
        })
    };
}

#[test]
fn ber_awgn_returns_ndarray() {
    with_module!(|py, m| {
        let snrs = PyArray1::from_vec(py, vec![0f64, 2.5, 5f64, 7.5]);
        let bers = m
            .getattr("ber_awgn")
            .unwrap()
            .call1(("QPSK", snrs))
            .unwrap()
            .downcast_into::<PyArray1<f64>>()
            .unwrap()
            .to_vec()
            .unwrap();

        let expected =
            awgnqos::ber::ber_awgn(&Modulation::Qpsk.into(), &[0f64, 2.5, 5f64, 7.5]);
        assert_eq!(bers.len(), 4);
        assert_eq!(bers, expected);
    })
}

#[test]
fn simulate_ber_qos_returns_array_and_metrics() {
    with_module!(|py, m| {
        let snrs = PyArray1::from_vec(py, vec![0f64, 5f64]);
        let (bers, metrics): (Bound<'_, PyArray1<f64>>, Bound<'_, PyAny>) = m
            .getattr("simulate_ber_qos")
            .unwrap()
            .call1(("BPSK", snrs))
            .unwrap()
            .extract()
            .unwrap();

        let (expected, expected_metrics) =
            simulate_ber_qos(&Scheme::from(Modulation::Bpsk), &[0f64, 5f64]);
        assert_eq!(bers.to_vec().unwrap(), expected);
        let avg_ber: f64 = metrics.getattr("avg_ber").unwrap().extract().unwrap();
        assert_eq!(avg_ber, expected_metrics.avg_ber);
        let delay: f64 = metrics.getattr("avg_delay_ms").unwrap().extract().unwrap();
        assert_eq!(delay, expected_metrics.avg_delay_ms);
    })
}

#[test]
fn add_curve_raises_value_error() {
    with_module!(|py, m| {
        let book = m.getattr("CurveBook").unwrap().call0().unwrap();
        let err = book
            .call_method1("add_curve", ("BPSK", "Curve", "0", "5", "five"))
            .unwrap_err();

        assert!(err.is_instance_of::<PyValueError>(py));
        let message = err.value(py).to_string();
        assert!(message.starts_with("Simulation error:"), "{message}");
        assert!(message.contains("five"), "{message}");
        assert_eq!(book.len().unwrap(), 0);
    })
}

#[test]
fn curve_book_add_and_clear() {
    with_module!(|_py, m| {
        let book = m.getattr("CurveBook").unwrap().call0().unwrap();
        let (series, row): (Bound<'_, PyAny>, Bound<'_, PyAny>) = book
            .call_method1("add_curve", ("16-QAM", "mine", "0", "5", "5"))
            .unwrap()
            .extract()
            .unwrap();

        let label: String = series.getattr("label").unwrap().extract().unwrap();
        assert_eq!(label, "mine (16-QAM)");
        let x: Vec<f64> = series.getattr("x").unwrap().extract().unwrap();
        assert_eq!(x, vec![0f64, 1.25, 2.5, 3.75, 5f64]);
        let modulation: String = row.getattr("modulation").unwrap().extract().unwrap();
        assert_eq!(modulation, "16-QAM");

        book.call_method1("add_curve", ("BPSK", "other", "-2", "8", "3"))
            .unwrap();
        assert_eq!(book.len().unwrap(), 2);
        let rows: Vec<Bound<'_, PyAny>> =
            book.call_method0("rows").unwrap().extract().unwrap();
        assert_eq!(rows.len(), 2);

        let removed: usize = book.call_method0("clear").unwrap().extract().unwrap();
        assert_eq!(removed, 2);
        assert_eq!(book.len().unwrap(), 0);
    })
}

#[test]
fn module_constants() {
    with_module!(|_py, m| {
        let title: String = m.getattr("PLOT_TITLE").unwrap().extract().unwrap();
        assert_eq!(title, "BER vs SNR (AWGN)");

        let columns: Vec<String> = m.getattr("TABLE_COLUMNS").unwrap().extract().unwrap();
        assert_eq!(
            columns,
            [
                "Curve",
                "Modulation",
                "Avg BER",
                "Throughput (Mbps)",
                "Delay (ms)",
                "Spectral Eff (bits/s/Hz)"
            ]
        );

        let names: Vec<String> = m
            .getattr("modulations")
            .unwrap()
            .call0()
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(names.len(), 6);
        assert_eq!(names[2], "8-PSK");
    })
}

#[test]
fn plot_layout_is_exported() {
    with_module!(|_py, m| {
        let layout = m
            .getattr("PLOT_LAYOUT")
            .unwrap()
            .downcast_into::<PyDict>()
            .unwrap();
        let get = |key: &str| layout.get_item(key).unwrap().unwrap();

        assert!(get("log_y").extract::<bool>().unwrap());
        assert!(get("grid").extract::<bool>().unwrap());
        assert_eq!(get("y_label").extract::<String>().unwrap(), "BER");

        let book = m.getattr("CurveBook").unwrap().call0().unwrap();
        let from_book = book.call_method0("layout").unwrap();
        assert!(from_book.eq(&layout).unwrap());
    })
}
