use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, Result, Series, SingleInput, WindowConfig,
    window::rolling,
};

/// Configuration for the Weighted Moving Average ([`Wma`]) indicator.
pub type WmaConfig = WindowConfig;

/// Weighted Moving Average (WMA).
///
/// Linearly weighted mean of the last `length` values: the oldest value in
/// the window has weight 1, the newest weight `length`, and the sum is
/// divided by `length · (length + 1) / 2`.
#[derive(Clone, Debug)]
pub struct Wma {
    config: WmaConfig,
}

#[allow(clippy::cast_precision_loss)]
fn weighted(window: &[Price]) -> Option<Price> {
    let n = window.len() as f64;
    let denominator = n * (n + 1.0) / 2.0;
    let numerator: f64 = window
        .iter()
        .zip(1_u32..)
        .map(|(x, w)| f64::from(w) * x)
        .sum();

    Some(numerator / denominator)
}

impl Indicator for Wma {
    type Config = WmaConfig;
    type Output = Series;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<Series> {
        let input = series.source(self.config.source())?;
        self.apply(&input)
    }

    fn warm_up(&self) -> usize {
        self.config.length() - 1
    }

    fn label(&self) -> String {
        format!(
            "wma_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Wma {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            rolling(input.values(), self.config.length(), weighted),
        ))
    }
}

impl Display for Wma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WMA({}, {})", self.config.length(), self.config.source())
    }
}
