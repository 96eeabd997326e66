use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, Price, PriceSeries, RangeConfig, Result, Series,
    tr::true_range,
    window::{mean, rolling},
};

/// Configuration for the Average True Range ([`Atr`]) indicator.
pub type AtrConfig = RangeConfig;

/// Average True Range (ATR).
///
/// Simple mean of the last `length` [`Tr`](crate::Tr) values. Since the first
/// true range is undefined, the first value is at position `length`.
#[derive(Clone, Debug)]
pub struct Atr {
    config: AtrConfig,
}

pub(crate) fn atr(series: &PriceSeries, length: usize) -> Vec<Option<Price>> {
    rolling(&true_range(series), length, mean)
}

impl Indicator for Atr {
    type Config = AtrConfig;
    type Output = Series;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<Series> {
        self.config.validate(series.len())?;
        Ok(Series::new(
            self.label(),
            atr(series, self.config.length()),
        ))
    }

    fn warm_up(&self) -> usize {
        self.config.length()
    }

    fn label(&self) -> String {
        format!("atr_{}", self.config.length())
    }
}

impl Display for Atr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ATR({})", self.config.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        test_util::{assert_series, hlc_series, nz},
    };

    fn atr(length: usize) -> Atr {
        Atr::new(AtrConfig::new(nz(length)))
    }

    #[test]
    fn mean_of_true_range() {
        // TR: _, 5, 4, 4.5
        let s = hlc_series(&[
            (10.0, 8.0, 9.0),
            (12.0, 7.0, 11.0),
            (15.0, 14.0, 14.5),
            (13.0, 10.0, 11.0),
        ]);
        let out = atr(2).compute(&s).unwrap();
        assert_series!(out, [None, None, Some(4.5), Some(4.25)]);
    }

    #[test]
    fn warm_up_is_length() {
        let s = hlc_series(&[(2.0, 1.0, 1.5); 10]);
        let ind = atr(4);
        assert_eq!(ind.compute(&s).unwrap().first_defined(), Some(4));
        assert_eq!(ind.warm_up(), 4);
    }

    #[test]
    fn length_above_rows_is_rejected() {
        let err = atr(5)
            .compute(&hlc_series(&[(2.0, 1.0, 1.5); 3]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "length", .. }));
    }
}
