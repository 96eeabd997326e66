use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ewm::{ewm, span_alpha},
};

/// Configuration for the Exponential Moving Average ([`Ema`]) indicator.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{EmaConfig, IndicatorConfig, IndicatorConfigBuilder, Source};
/// use std::num::NonZero;
///
/// let config = EmaConfig::builder()
///     .length(NonZero::new(20).unwrap())
///     .source(Source::HLC3)
///     .adjust(false)
///     .build();
///
/// assert_eq!(config.length(), 20);
/// assert!(!config.adjust());
/// ```
pub type EmaConfig = SmoothingConfig;

/// Exponential Moving Average (EMA).
///
/// Exponentially weighted mean with `α = 2 / (length + 1)`. Defined from the
/// first observed input onward: there is no warm-up, early values simply
/// average fewer observations.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Ema, EmaConfig, Series, SingleInput};
/// use std::num::NonZero;
///
/// // length 3: α = 0.5
/// let ema = Ema::new(EmaConfig::close(NonZero::new(3).unwrap()));
/// let out = ema.apply(&Series::from_prices("x", [1.0, 2.0])).unwrap();
///
/// assert_eq!(out.get(0), Some(1.0));
/// // (2 + 0.5 · 1) / 1.5
/// assert!((out.get(1).unwrap() - 2.5 / 1.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Ema {
    config: EmaConfig,
}

pub(crate) fn ema(values: &[Option<Price>], length: usize, adjust: bool) -> Vec<Option<Price>> {
    ewm(values, span_alpha(length), adjust)
}

impl Indicator for Ema {
    type Config = EmaConfig;
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
            "ema_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Ema {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            ema(input.values(), self.config.length(), self.config.adjust()),
        ))
    }
}

impl Display for Ema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({}, {})", self.config.length(), self.config.source())
    }
}
