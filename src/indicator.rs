use crate::{PriceSeries, Result, Series};

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Configuration for a technical [`Indicator`].
///
/// Every indicator has a corresponding config type that holds its parameters
/// (lengths, price source, etc). Configs are value types: cheap to clone,
/// compare, and hash.
pub trait IndicatorConfig: Sized + Clone + PartialEq + Eq + Hash + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: IndicatorConfigBuilder<Self>;

    /// Returns a new builder with default values.
    fn builder() -> Self::Builder;

    /// Checks every window length against the number of rows it will be
    /// applied to.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) when a
    /// length exceeds `rows`.
    fn validate(&self, rows: usize) -> Result<()>;
}

/// Builder for an [`IndicatorConfig`].
pub trait IndicatorConfigBuilder<Config>
where
    Config: IndicatorConfig,
{
    /// Builds the config.
    #[must_use]
    fn build(self) -> Config;
}

/// A technical indicator computed over a whole [`PriceSeries`].
///
/// Indicators hold nothing but their configuration: computing twice on the
/// same input yields bit-identical output, and independent indicators can
/// share one `&PriceSeries` across threads.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Indicator, PriceSeries, Sma, SmaConfig};
/// use std::num::NonZero;
/// # use ohlcv_ta::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.0 }
/// #     fn high(&self) -> Price { self.0 }
/// #     fn low(&self) -> Price { self.0 }
/// #     fn close(&self) -> Price { self.0 }
/// #     fn volume(&self) -> f64 { 1.0 }
/// #     fn open_time(&self) -> Timestamp { self.1 }
/// # }
///
/// let series = PriceSeries::from_bars(&[Bar(10.0, 1), Bar(20.0, 2), Bar(30.0, 3)]);
/// let sma = Sma::new(SmaConfig::close(NonZero::new(3).unwrap()));
///
/// let out = sma.compute(&series).unwrap();
/// assert_eq!(out.values(), &[None, None, Some(20.0)]);
/// assert_eq!(sma.warm_up(), 2);
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Computed output type. [`Series`] for simple indicators,
    /// a struct of series for composite ones (e.g. Bollinger Bands).
    type Output: Debug;

    /// Creates a new indicator from the given config.
    fn new(config: Self::Config) -> Self;

    fn config(&self) -> &Self::Config;

    /// Computes the indicator over every row of `series`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) when a
    /// window length exceeds the row count,
    /// [`Error::UnknownColumn`](crate::Error::UnknownColumn) when the
    /// configured source column is not attached.
    fn compute(&self, series: &PriceSeries) -> Result<Self::Output>;

    /// Number of leading "no value" positions on an input without gaps.
    fn warm_up(&self) -> usize;

    /// Chart label of the (primary) output, e.g. `sma_14`.
    fn label(&self) -> String;
}

/// An indicator driven by a single input column.
///
/// [`apply`](SingleInput::apply) computes on any [`Series`], which is how
/// derived series are chained: the output of one indicator becomes the
/// input of the next with no state carried between the two.
pub trait SingleInput: Indicator<Output = Series> {
    /// Computes the indicator over `input`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) when a
    /// window length exceeds `input.len()`.
    fn apply(&self, input: &Series) -> Result<Series>;
}
