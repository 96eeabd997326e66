use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, WindowConfig,
    series::lagged,
};

/// Configuration for the Momentum ([`Mom`]) indicator.
pub type MomConfig = WindowConfig;

/// Market Momentum (MOM).
///
/// `x[t] - x[t - length]`. The first `length` positions have no value.
#[derive(Clone, Debug)]
pub struct Mom {
    config: MomConfig,
}

impl Indicator for Mom {
    type Config = MomConfig;
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
            "mom_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Mom {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            lagged(input.values(), self.config.length(), |cur, prev| {
                Some(cur - prev)
            }),
        ))
    }
}

impl Display for Mom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MOM({}, {})", self.config.length(), self.config.source())
    }
}
