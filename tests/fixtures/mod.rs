#![allow(dead_code)]

use ohlcv_ta::{Ohlcv, Price, PriceSeries, Series, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// OHLCV bar parsed from a Binance-style kline CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

/// Reference value with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: f64,
}

/// Reference band values (BB, KC) with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefBands {
    pub open_time: u64,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Reference MACD lines with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefMacd {
    pub open_time: u64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/dogeusdt-1h.csv";

/// Load reference OHLCV bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_ohlcvs(OHLCV_PATH)
}

/// Load OHLCV bars from any kline CSV with the same header.
pub fn load_ohlcvs(path: &str) -> Vec<RefBar> {
    load_records(path, "invalid OHLCV record")
}

/// Load reference bars straight into a series store.
pub fn load_reference_series() -> PriceSeries {
    PriceSeries::from_bars(&load_reference_ohlcvs())
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load band reference data (upper, middle, lower).
pub fn load_bands_ref(path: &str) -> Vec<RefBands> {
    load_records(path, "invalid band reference record")
}

/// Load MACD reference data (macd, signal, histogram).
pub fn load_macd_ref(path: &str) -> Vec<RefMacd> {
    load_records(path, "invalid MACD reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Walks `actual` alongside the reference rows.
///
/// Reference files list only the bars where a value exists, in time order:
/// every listed bar must match within `tolerance`, every other bar must be
/// undefined.
pub fn assert_matches_reference(
    times: &[u64],
    actual: &Series,
    reference: impl IntoIterator<Item = (u64, f64)>,
    tolerance: f64,
) {
    assert_eq!(times.len(), actual.len(), "{} misaligned", actual.name());

    let mut reference = reference.into_iter().peekable();
    let mut checked = 0;

    for (i, (&t, value)) in times.iter().zip(actual.iter()).enumerate() {
        match reference.next_if(|&(rt, _)| rt == t) {
            Some((_, expected)) => {
                let value = value.unwrap_or_else(|| {
                    panic!("{} returned None at bar {i} (t={t})", actual.name())
                });
                assert_near(
                    value,
                    expected,
                    tolerance,
                    &format!("{} at bar {i} (t={t})", actual.name()),
                );
                checked += 1;
            }
            None => assert!(
                value.is_none(),
                "{} has {value:?} at bar {i} (t={t}) but the reference has none",
                actual.name()
            ),
        }
    }

    assert!(
        reference.next().is_none(),
        "not all reference values checked for {} ({checked} matched)",
        actual.name()
    );
}

/// Generate a reference match test for a single-output indicator.
///
/// Usage: `reference_test!(sma_14, Sma::new(SmaConfig::close(nz(14))), "tests/fixtures/data/sma-14-close.csv", 1e-10);`
#[allow(unused_macros)]
macro_rules! reference_test {
    ($name:ident, $indicator:expr, $ref_path:expr, $tolerance:expr) => {
        mod $name {
            use super::fixtures::*;
            use ohlcv_ta::*;
            use std::num::NonZero;

            fn nz(n: usize) -> NonZero<usize> {
                NonZero::new(n).unwrap()
            }

            #[test]
            fn matches_reference() {
                let series = load_reference_series();
                let reference = load_ref_values($ref_path);
                let out = $indicator.compute(&series).unwrap();

                assert_matches_reference(
                    series.time(),
                    &out,
                    reference.iter().map(|r| (r.open_time, r.expected)),
                    $tolerance,
                );
            }

            #[test]
            fn recompute_is_identical() {
                let series = load_reference_series();
                let indicator = $indicator;
                assert_eq!(
                    indicator.compute(&series).unwrap(),
                    indicator.compute(&series).unwrap()
                );
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use reference_test;

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
