// src/test_util.rs

use std::num::NonZero;

use crate::{Ohlcv, Price, PriceSeries, Timestamp};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `16 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e): (f64, f64) = ($actual, $expected);
        assert!(
            (a - e).abs() <= e.abs().max(1.0) * 16.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;

/// Asserts a series matches the expected optional values, approximately.
macro_rules! assert_series {
    ($series:expr, [$($expected:expr),* $(,)?]) => {{
        let expected: Vec<Option<f64>> = vec![$($expected),*];
        let actual = $series.values().to_vec();
        assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?}");
        for (i, (a, e)) in actual.iter().zip(&expected).enumerate() {
            match (a, e) {
                (None, None) => {}
                (Some(a), Some(e)) => assert!(
                    (a - e).abs() <= e.abs().max(1.0) * 1e-12,
                    "value mismatch at {i}: actual={a}, expected={e}",
                ),
                _ => panic!("definedness mismatch at {i}: actual={a:?}, expected={e:?}"),
            }
        }
    }};
}

pub(crate) use assert_series;

pub fn nz(n: usize) -> NonZero<usize> {
    NonZero::new(n).unwrap()
}

pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub open_time: u64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: 1.0,
            open_time: 0,
        }
    }

    pub fn at(mut self, open_time: u64) -> Self {
        self.open_time = open_time;
        self
    }

    pub fn vol(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }
}

/// Convenience: bar with just a close price and timestamp (OHLC all equal to close).
pub fn bar(close: f64, time: u64) -> Bar {
    Bar::new(close, close, close, close).at(time)
}

/// Series where every bar is flat at the given close, volume 1.
pub fn series_of(closes: &[f64]) -> PriceSeries {
    closes
        .iter()
        .zip(1..)
        .map(|(&c, t)| bar(c, t))
        .collect()
}

/// Series from `(high, low, close)` triples, open = close.
pub fn hlc_series(rows: &[(f64, f64, f64)]) -> PriceSeries {
    rows.iter()
        .zip(1..)
        .map(|(&(h, l, c), t)| Bar::new(c, h, l, c).at(t))
        .collect()
}

impl Ohlcv for Bar {
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
