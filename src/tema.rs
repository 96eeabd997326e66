use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ema::ema,
    series::zip_with,
};

/// Configuration for the Triple Exponential Moving Average ([`Tema`]) indicator.
pub type TemaConfig = SmoothingConfig;

/// Triple Exponential Moving Average (TEMA).
///
/// `3 · EMA - 3 · EMA(EMA) + EMA(EMA(EMA))`.
#[derive(Clone, Debug)]
pub struct Tema {
    config: TemaConfig,
}

impl Indicator for Tema {
    type Config = TemaConfig;
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
            "tema_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Tema {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;

        let (length, adjust) = (self.config.length(), self.config.adjust());
        let single = ema(input.values(), length, adjust);
        let double = ema(&single, length, adjust);
        let triple = ema(&double, length, adjust);

        let lead = zip_with(&single, &double, |e1, e2| Some(3.0 * (e1 - e2)));

        Ok(Series::new(
            self.label(),
            zip_with(&lead, &triple, |l, e3| Some(l + e3)),
        ))
    }
}

impl Display for Tema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TEMA({}, {})", self.config.length(), self.config.source())
    }
}
