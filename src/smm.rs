use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, WindowConfig,
    window::{median, rolling},
};

/// Configuration for the Simple Moving Median ([`Smm`]) indicator.
pub type SmmConfig = WindowConfig;

/// Simple Moving Median (SMM).
///
/// Median of the last `length` values; for even lengths, the mean of the
/// two middle values. Less sensitive to single-bar spikes than [`Sma`](crate::Sma).
#[derive(Clone, Debug)]
pub struct Smm {
    config: SmmConfig,
}

impl Indicator for Smm {
    type Config = SmmConfig;
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
            "smm_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Smm {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            rolling(input.values(), self.config.length(), median),
        ))
    }
}

impl Display for Smm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMM({}, {})", self.config.length(), self.config.source())
    }
}
