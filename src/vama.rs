use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, Result, Series, WindowConfig,
    series::{ratio, zip_with},
    window::{mean, rolling, sum},
};

/// Configuration for the Volume Adjusted Moving Average ([`Vama`]) indicator.
pub type VamaConfig = WindowConfig;

/// Volume Adjusted Moving Average (VAMA).
///
/// Each bar gets a weight `r = volume · price / mean(volume, length)`: bars
/// traded on above-average volume count more. The output is the
/// `r`-weighted mean of price over the last `length` bars,
/// `Σ(r · price) / Σ r`.
///
/// Both passes are windows of `length`, so the first value is at position
/// `2 · (length - 1)`. A window with zero mean volume or zero total weight
/// has no value.
#[derive(Clone, Debug)]
pub struct Vama {
    config: VamaConfig,
}

pub(crate) fn vama(
    price: &[Option<Price>],
    volume: &[Option<Price>],
    length: usize,
) -> Vec<Option<Price>> {
    let volume_price = zip_with(volume, price, |v, p| Some(v * p));
    let mean_volume = rolling(volume, length, mean);
    let weight = zip_with(&volume_price, &mean_volume, ratio);

    let weighted_price = zip_with(&weight, price, |w, p| Some(w * p));
    let numerator = rolling(&weighted_price, length, sum);
    let denominator = rolling(&weight, length, sum);

    zip_with(&numerator, &denominator, ratio)
}

impl Indicator for Vama {
    type Config = VamaConfig;
    type Output = Series;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<Series> {
        let price = series.source(self.config.source())?;
        self.config.validate(series.len())?;

        Ok(Series::new(
            self.label(),
            vama(
                price.values(),
                series.volume().values(),
                self.config.length(),
            ),
        ))
    }

    fn warm_up(&self) -> usize {
        2 * (self.config.length() - 1)
    }

    fn label(&self) -> String {
        format!(
            "vama_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl Display for Vama {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VAMA({}, {})", self.config.length(), self.config.source())
    }
}
