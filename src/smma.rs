use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    ewm::{ewm, wilder_alpha},
};

/// Configuration for the Smoothed Moving Average ([`Smma`]) indicator.
pub type SmmaConfig = SmoothingConfig;

/// Smoothed Moving Average (SMMA), also known as Wilder's moving average.
///
/// Exponentially weighted mean with `α = 1 / length`: recent prices are
/// weighted the same as in [`Ssma`](crate::Ssma). [`Rsi`](crate::Rsi)
/// smooths gains and losses with the same kernel.
#[derive(Clone, Debug)]
pub struct Smma {
    config: SmmaConfig,
}

pub(crate) fn smma(values: &[Option<Price>], length: usize, adjust: bool) -> Vec<Option<Price>> {
    ewm(values, wilder_alpha(length), adjust)
}

impl Indicator for Smma {
    type Config = SmmaConfig;
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
            "smma_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Smma {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;
        Ok(Series::new(
            self.label(),
            smma(input.values(), self.config.length(), self.config.adjust()),
        ))
    }
}

impl Display for Smma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMMA({}, {})", self.config.length(), self.config.source())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{
        IndicatorConfigBuilder, Ssma, SsmaConfig,
        test_util::{nz, series_of},
    };

    #[test]
    fn matches_ssma() {
        let s = series_of(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        let smma = Smma::new(SmmaConfig::close(nz(3))).compute(&s).unwrap();
        let ssma = Ssma::new(SsmaConfig::close(nz(3))).compute(&s).unwrap();
        assert_eq!(smma.values(), ssma.values());
    }

    #[test]
    fn unadjusted_is_wilder_recursion() {
        // α = 0.5: 2, 3, 4.5
        let config = SmmaConfig::builder().length(nz(2)).adjust(false).build();
        let out = Smma::new(config)
            .compute(&series_of(&[2.0, 4.0, 6.0]))
            .unwrap();
        assert_eq!(out.values(), &[Some(2.0), Some(3.0), Some(4.5)]);
    }
}
