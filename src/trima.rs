use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, PriceSeries, Result, Series, SingleInput, WindowConfig,
    series::map,
    sma::sma,
    window::{rolling, sum},
};

/// Configuration for the Triangular Moving Average ([`Trima`]) indicator.
pub type TrimaConfig = WindowConfig;

/// Triangular Moving Average (TRIMA).
///
/// The sum of the last `length` [`Sma`](crate::Sma) values divided by
/// `length`: an SMA of an SMA, which weights the middle of the combined
/// window most. First value at position `2 · (length - 1)`.
#[derive(Clone, Debug)]
pub struct Trima {
    config: TrimaConfig,
}

impl Indicator for Trima {
    type Config = TrimaConfig;
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
        2 * (self.config.length() - 1)
    }

    fn label(&self) -> String {
        format!(
            "trima_{}{}",
            self.config.length(),
            self.config.source().label_suffix()
        )
    }
}

impl SingleInput for Trima {
    #[allow(clippy::cast_precision_loss)]
    fn apply(&self, input: &Series) -> Result<Series> {
        self.config.validate(input.len())?;

        let length = self.config.length();
        let summed = rolling(&sma(input.values(), length), length, sum);

        Ok(Series::new(
            self.label(),
            map(&summed, |s| Some(s / length as f64)),
        ))
    }
}

impl Display for Trima {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TRIMA({}, {})", self.config.length(), self.config.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, nz, series_of};

    fn trima(length: usize) -> Trima {
        Trima::new(TrimaConfig::close(nz(length)))
    }

    #[test]
    fn sma_of_sma() {
        // SMA(2) = _, 1.5, 2.5, 3.5; TRIMA = _, _, 2, 3
        let out = trima(2)
            .compute(&series_of(&[1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        assert_series!(out, [None, None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn warm_up_is_twice_length_minus_one() {
        let ind = trima(4);
        let out = ind.compute(&series_of(&[1.0; 12])).unwrap();
        assert_eq!(ind.warm_up(), 6);
        assert_eq!(out.first_defined(), Some(6));
    }

    #[test]
    fn short_series_has_no_values() {
        // length fits the series but the second pass never fills
        let out = trima(3).compute(&series_of(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(out.first_defined(), None);
        assert_eq!(out.len(), 3);
    }
}
