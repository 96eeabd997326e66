use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, WindowConfig,
    series::{lagged, ratio},
};

/// Configuration for the Rate of Change ([`Roc`]) indicator.
pub type RocConfig = WindowConfig;

/// Rate of Change (ROC).
///
/// Percentage change over `length` bars:
/// `100 · (x[t] - x[t - length]) / x[t - length]`. The first `length`
/// positions have no value; so does any position whose base is zero.
#[derive(Clone, Debug)]
pub struct Roc {
    config: RocConfig,
}

impl Indicator for Roc {
    type Config = RocConfig;
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
        self.config.length()
    }

    fn label(&self) -> String {
        format!(
            "roc_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Roc {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            lagged(input.values(), self.config.length(), |cur, prev| {
                ratio(cur - prev, prev).map(|r| r * 100.0)
            }),
        ))
    }
}

impl Display for Roc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ROC({}, {})", self.config.length(), self.config.source())
    }
}
