use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ema::ema,
    series::{lagged, ratio},
};

/// Configuration for the [`Trix`] indicator.
pub type TrixConfig = SmoothingConfig;

/// Triple Exponential Average oscillator (TRIX).
///
/// With `m = EMA(EMA(EMA(x)))`, the one-bar percentage change
/// `100 · (m[t] - m[t - 1]) / m[t]`. The first position has no value, as
/// does any position where `m` is zero.
#[derive(Clone, Debug)]
pub struct Trix {
    config: TrixConfig,
}

impl Indicator for Trix {
    type Config = TrixConfig;
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
        1
    }

    fn label(&self) -> String {
        format!(
            "trix_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Trix {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;

        let (length, adjust) = (self.config.length(), self.config.adjust());
        let single = ema(input.values(), length, adjust);
        let triple = ema(&ema(&single, length, adjust), length, adjust);

        Ok(Series::new(
            self.label(),
            lagged(&triple, 1, |cur, prev| {
                ratio(cur - prev, cur).map(|r| r * 100.0)
            }),
        ))
    }
}

impl Display for Trix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TRIX({}, {})", self.config.length(), self.config.source())
    }
}
