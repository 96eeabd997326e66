use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ema::ema,
    series::zip_with,
};

/// Configuration for the Double Exponential Moving Average ([`Dema`]) indicator.
pub type DemaConfig = SmoothingConfig;

/// Double Exponential Moving Average (DEMA).
///
/// `2 · EMA - EMA(EMA)`, which cancels most of the lag of a single EMA.
#[derive(Clone, Debug)]
pub struct Dema {
    config: DemaConfig,
}

impl Indicator for Dema {
    type Config = DemaConfig;
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
            "dema_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Dema {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;

        let (length, adjust) = (self.config.length(), self.config.adjust());
        let single = ema(input.values(), length, adjust);
        let double = ema(&single, length, adjust);

        Ok(Series::new(
            self.label(),
            zip_with(&single, &double, |e1, e2| Some(2.0f64.mul_add(e1, -e2))),
        ))
    }
}

impl Display for Dema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DEMA({}, {})", self.config.length(), self.config.source())
    }
}
