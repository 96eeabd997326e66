use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, RangeConfig, Result, Series,
    series::{map, ratio, zip_with},
    window::{max, min, rolling},
};

/// Configuration for the Stochastic Oscillator ([`Stoch`]) indicator.
pub type StochConfig = RangeConfig;

/// Stochastic Oscillator %K (STOCH).
///
/// Where the close sits within the high/low range of the last `length`
/// bars, scaled to `[0, 100]`: `100 · (close - LL) / (HH - LL)`. A window
/// with zero range has no value.
#[derive(Clone, Debug)]
pub struct Stoch {
    config: StochConfig,
}

/// Highest high and lowest low over each trailing window of `length` bars.
pub(crate) fn channel(
    series: &PriceSeries,
    length: usize,
) -> (Vec<Option<Price>>, Vec<Option<Price>>) {
    (
        rolling(series.high().values(), length, max),
        rolling(series.low().values(), length, min),
    )
}

impl Indicator for Stoch {
    type Config = StochConfig;
    type Output = Series;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<Series> {
        self.config.validate(series.len())?;

        let (highest, lowest) = channel(series, self.config.length());
        let range = zip_with(&highest, &lowest, |hh, ll| Some(hh - ll));
        let position = zip_with(series.close().values(), &lowest, |c, ll| Some(c - ll));
        let k = zip_with(&position, &range, ratio);

        Ok(Series::new(
            self.label(),
            map(&k, |k| Some(k * 100.0)),
        ))
    }

    fn warm_up(&self) -> usize {
        self.config.length() - 1
    }

    fn label(&self) -> String {
        format!("stoch_{}", self.config.length())
    }
}

impl Display for Stoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "STOCH({})", self.config.length())
    }
}
