use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, RangeConfig, Result, Series,
    series::{map, ratio, zip_with},
    stoch::channel,
};

/// Configuration for the Williams %R ([`Williams`]) indicator.
pub type WilliamsConfig = RangeConfig;

/// Williams %R.
///
/// `-100 · (HH - close) / (HH - LL)` over the last `length` bars, in
/// `[-100, 0]`. A window with zero range has no value.
#[derive(Clone, Debug)]
pub struct Williams {
    config: WilliamsConfig,
}

impl Indicator for Williams {
    type Config = WilliamsConfig;
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
        let distance = zip_with(&highest, series.close().values(), |hh, c| Some(hh - c));
        let r = zip_with(&distance, &range, ratio);

        Ok(Series::new(
            self.label(),
            map(&r, |r| Some(r * -100.0)),
        ))
    }

    fn warm_up(&self) -> usize {
        self.config.length() - 1
    }

    fn label(&self) -> String {
        format!("williams_{}", self.config.length())
    }
}

impl Display for Williams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WILLIAMS({})", self.config.length())
    }
}
