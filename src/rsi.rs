use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, SmoothingConfig,
    series::{lagged, map, ratio, zip_with},
    smma::smma,
};

/// Configuration for the Relative Strength Index ([`Rsi`]) indicator.
///
/// # Example
///
/// ```
/// use ohlcv_ta::RsiConfig;
/// use std::num::NonZero;
///
/// let config = RsiConfig::close(NonZero::new(14).unwrap());
/// assert_eq!(config.length(), 14);
/// assert!(config.adjust());
/// ```
pub type RsiConfig = SmoothingConfig;

/// Relative Strength Index (RSI).
///
/// One-bar changes are split into gains and absolute losses, each smoothed
/// with Wilder's `α = 1 / length`. With `RS = avg_gain / avg_loss` the
/// output is `100 - 100 / (1 + RS)`, bounded to `[0, 100]`.
///
/// The first position has no change and therefore no value. A position
/// with zero average loss has no value either.
#[derive(Clone, Debug)]
pub struct Rsi {
    config: RsiConfig,
}

impl Indicator for Rsi {
    type Config = RsiConfig;
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
            "rsi_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Rsi {
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;

        let (length, adjust) = (self.config.length(), self.config.adjust());
        let change = lagged(input.values(), 1, |cur, prev| Some(cur - prev));
        let gain = map(&change, |c| Some(c.max(0.0)));
        let loss = map(&change, |c| Some((-c).max(0.0)));

        let avg_gain = smma(&gain, length, adjust);
        let avg_loss = smma(&loss, length, adjust);
        let strength = zip_with(&avg_gain, &avg_loss, ratio);

        Ok(Series::new(
            self.label(),
            map(&strength, |rs| Some(100.0 - 100.0 / (1.0 + rs))),
        ))
    }
}

impl Display for Rsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({}, {})", self.config.length(), self.config.source())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, nz, series_of};

    fn rsi(length: usize) -> Rsi {
        Rsi::new(RsiConfig::close(nz(length)))
    }

    mod values {
        use super::*;

        #[test]
        fn smoothed_gains_and_losses() {
            // α = 0.5, changes +2, -1, +2
            // pos 2: gain 2/3, loss 2/3, RS 1
            // pos 3: gain 2.5/1.75, loss 0.5/1.75, RS 5
            let out = rsi(2)
                .compute(&series_of(&[10.0, 12.0, 11.0, 13.0]))
                .unwrap();
            assert_series!(out, [None, None, Some(50.0), Some(100.0 - 100.0 / 6.0)]);
        }

        #[test]
        fn all_losses_gives_zero() {
            let out = rsi(3)
                .compute(&series_of(&[13.0, 12.0, 11.0, 10.0]))
                .unwrap();
            assert_series!(out, [None, Some(0.0), Some(0.0), Some(0.0)]);
        }
    }

    mod zero_loss {
        use super::*;

        #[test]
        fn all_gains_has_no_value() {
            let out = rsi(3)
                .compute(&series_of(&[10.0, 11.0, 12.0, 13.0]))
                .unwrap();
            assert_eq!(out.first_defined(), None);
        }

        #[test]
        fn flat_price_has_no_value() {
            let out = rsi(3).compute(&series_of(&[100.0; 8])).unwrap();
            assert_eq!(out.first_defined(), None);
        }
    }

    mod bounds {
        use super::*;

        #[test]
        fn always_between_0_and_100() {
            let prices = [
                100.0, 102.0, 99.0, 101.0, 98.0, 103.0, 97.0, 105.0, 96.0, 104.0, 50.0, 150.0,
            ];
            let out = rsi(3).compute(&series_of(&prices)).unwrap();
            for (i, value) in out.defined() {
                assert!((0.0..=100.0).contains(&value), "RSI out of bounds at {i}: {value}");
            }
        }
    }

    #[test]
    fn warm_up_is_one() {
        // first change is a loss, so position 1 is defined
        let prices = [3.0, 1.0, 2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0, 6.0, 8.0, 7.0, 9.0];
        let ind = rsi(14);
        let out = ind.compute(&series_of(&prices)).unwrap();
        assert_eq!(out.first_defined(), Some(ind.warm_up()));
    }

    #[test]
    fn display() {
        assert_eq!(rsi(14).to_string(), "RSI(14, close)");
    }
}
