use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ewm::{ewm, wilder_alpha},
};

/// Configuration for the Smoothed Simple Moving Average ([`Ssma`]) indicator.
pub type SsmaConfig = SmoothingConfig;

/// Smoothed Simple Moving Average (SSMA).
///
/// Exponentially weighted mean with `α = 1 / length`. A missing input keeps
/// its slot in the weighting, so older observations keep decaying across
/// gaps.
#[derive(Clone, Debug)]
pub struct Ssma {
    config: SsmaConfig,
}

impl Indicator for Ssma {
    type Config = SsmaConfig;
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
        0
    }

    fn label(&self) -> String {
        format!(
            "ssma_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Ssma {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            ewm(
                input.values(),
                wilder_alpha(self.config.length()),
                self.config.adjust(),
            ),
        ))
    }
}

impl Display for Ssma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SSMA({}, {})", self.config.length(), self.config.source())
    }
}
