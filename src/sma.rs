use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, Result, Series, SingleInput, WindowConfig,
    window::{mean, rolling},
};

/// Configuration for the Simple Moving Average ([`Sma`]) indicator.
///
/// # Example
///
/// ```rust
/// use ohlcv_ta::SmaConfig;
/// use std::num::NonZero;
///
/// let config = SmaConfig::close(NonZero::new(20).unwrap());
/// assert_eq!(config.length(), 20);
/// ```
pub type SmaConfig = WindowConfig;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the last `length` values. The first `length - 1`
/// positions have no value, as does any position whose window contains a
/// missing input.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Series, SingleInput, Sma, SmaConfig};
/// use std::num::NonZero;
///
/// let sma = Sma::new(SmaConfig::close(NonZero::new(3).unwrap()));
/// let input = Series::from_prices("x", [2.0, 4.0, 6.0, 8.0]);
///
/// let out = sma.apply(&input).unwrap();
/// assert_eq!(out.values(), &[None, None, Some(4.0), Some(6.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct Sma {
    config: SmaConfig,
}

pub(crate) fn sma(values: &[Option<Price>], length: usize) -> Vec<Option<Price>> {
    rolling(values, length, mean)
}

impl Indicator for Sma {
    type Config = SmaConfig;
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
            "sma_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Sma {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            sma(input.values(), self.config.length()),
        ))
    }
}

impl Display for Sma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({}, {})", self.config.length(), self.config.source())
    }
}
