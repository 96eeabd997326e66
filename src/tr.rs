use std::fmt::Display;

use crate::{Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, PriceSeries, Result, Series};

/// Configuration for the True Range ([`Tr`]) indicator.
///
/// True Range has no parameters; the config exists so that `Tr` fits the
/// same [`Indicator`] interface as everything else.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct TrConfig;

impl IndicatorConfig for TrConfig {
    type Builder = TrConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        TrConfigBuilder
    }

    fn validate(&self, _rows: usize) -> Result<()> {
        Ok(())
    }
}

impl Display for TrConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrConfig")
    }
}

/// Builder for [`TrConfig`].
pub struct TrConfigBuilder;

impl IndicatorConfigBuilder<TrConfig> for TrConfigBuilder {
    fn build(self) -> TrConfig {
        TrConfig
    }
}

/// True Range (TR).
///
/// The largest of `high - low`, `|high - prev_close|` and
/// `|prev_close - low|`. The first bar has no previous close and therefore
/// no value.
#[derive(Clone, Debug, Default)]
pub struct Tr {
    config: TrConfig,
}

pub(crate) fn true_range(series: &PriceSeries) -> Vec<Option<Price>> {
    let (high, low, close) = (
        series.high().values(),
        series.low().values(),
        series.close().values(),
    );

    (0..series.len())
        .map(|i| {
            let prev_close = close[i.checked_sub(1)?]?;
            let (h, l) = (high[i]?, low[i]?);
            Some(
                (h - l)
                    .abs()
                    .max((h - prev_close).abs())
                    .max((prev_close - l).abs()),
            )
        })
        .collect()
}

impl Indicator for Tr {
    type Config = TrConfig;
    type Output = Series;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<Series> {
        Ok(Series::new(self.label(), true_range(series)))
    }

    fn warm_up(&self) -> usize {
        1
    }

    fn label(&self) -> String {
        "tr".to_string()
    }
}

impl Display for Tr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TR")
    }
}
