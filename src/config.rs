use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    num::NonZero,
};

use crate::{Error, IndicatorConfig, IndicatorConfigBuilder, Result, Source};

/// Length used when a builder is not given one.
const DEFAULT_LENGTH: NonZero<usize> = NonZero::new(10).unwrap();

/// Length used by range-based oscillators when a builder is not given one.
const DEFAULT_RANGE_LENGTH: NonZero<usize> = NonZero::new(14).unwrap();

/// Rejects a window length that exceeds the row count.
pub(crate) fn check_length(name: &'static str, length: usize, rows: usize) -> Result<()> {
    if length > rows {
        Err(Error::invalid_parameter(
            name,
            format!("{length} exceeds series length {rows}"),
        ))
    } else {
        Ok(())
    }
}

/// Band width multiplier for Bollinger Bands and Keltner Channels.
///
/// Wraps a positive, finite `f64`. Defaults to `2.0`.
///
/// Implements `Eq` and `Hash` via bit-level comparison, which is safe because
/// NaN is rejected at construction.
#[derive(Clone, Copy, Debug)]
pub struct Multiplier(f64);

impl Multiplier {
    /// Creates a new multiplier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `value` is zero, negative, or not finite.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::invalid_parameter(
                "multiplier",
                format!("{value} is not a positive finite number"),
            ))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Multiplier {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Multiplier {}

impl Hash for Multiplier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(2.0)
    }
}

/// Configuration for fixed-window indicators: [`Sma`](crate::Sma),
/// [`Smm`](crate::Smm), [`Trima`](crate::Trima), [`Wma`](crate::Wma),
/// [`Vama`](crate::Vama), [`Mom`](crate::Mom) and [`Roc`](crate::Roc).
///
/// # Example
///
/// ```rust
/// use ohlcv_ta::{IndicatorConfig, IndicatorConfigBuilder, Source, WindowConfig};
/// use std::num::NonZero;
///
/// let config = WindowConfig::builder()
///     .length(NonZero::new(20).unwrap())
///     .source(Source::HL2)
///     .build();
/// assert_eq!(config.length(), 20);
/// assert_eq!(config.source(), &Source::HL2);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct WindowConfig {
    length: usize,
    source: Source,
}

impl IndicatorConfig for WindowConfig {
    type Builder = WindowConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        WindowConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("length", self.length, rows)
    }
}

impl WindowConfig {
    /// Window on closing price.
    #[must_use]
    pub fn close(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    /// Window on a named derived column.
    #[must_use]
    pub fn column(length: NonZero<usize>, name: impl Into<String>) -> Self {
        Self::builder()
            .length(length)
            .source(Source::column(name))
            .build()
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }
}

impl Display for WindowConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WindowConfig({}, {})", self.length, self.source)
    }
}

/// Builder for [`WindowConfig`].
///
/// Defaults: length = 10, source = [`Source::Close`].
pub struct WindowConfigBuilder {
    length: NonZero<usize>,
    source: Source,
}

impl WindowConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            source: Source::Close,
        }
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length = length;
        self
    }

    #[inline]
    #[must_use]
    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }
}

impl IndicatorConfigBuilder<WindowConfig> for WindowConfigBuilder {
    fn build(self) -> WindowConfig {
        WindowConfig {
            length: self.length.get(),
            source: self.source,
        }
    }
}

/// Configuration for exponentially smoothed indicators: [`Ema`](crate::Ema),
/// [`Ssma`](crate::Ssma), [`Smma`](crate::Smma), [`Dema`](crate::Dema),
/// [`Tema`](crate::Tema), [`Trix`](crate::Trix) and [`Rsi`](crate::Rsi).
///
/// With `adjust` (the default) every output is the weighted mean of all
/// observations so far, with weights `(1 - α)^i` normalised by their sum.
/// Without it the plain recursion `y = α·x + (1 - α)·y` is used, seeded with
/// the first observation.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct SmoothingConfig {
    length: usize,
    source: Source,
    adjust: bool,
}

impl IndicatorConfig for SmoothingConfig {
    type Builder = SmoothingConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        SmoothingConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("length", self.length, rows)
    }
}

impl SmoothingConfig {
    /// Adjusted smoothing on closing price.
    #[must_use]
    pub fn close(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn adjust(&self) -> bool {
        self.adjust
    }
}

impl Display for SmoothingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SmoothingConfig({}, {}, adjust={})",
            self.length, self.source, self.adjust
        )
    }
}

/// Builder for [`SmoothingConfig`].
///
/// Defaults: length = 10, source = [`Source::Close`], adjust = `true`.
pub struct SmoothingConfigBuilder {
    length: NonZero<usize>,
    source: Source,
    adjust: bool,
}

impl SmoothingConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            source: Source::Close,
            adjust: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length = length;
        self
    }

    #[inline]
    #[must_use]
    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Enables or disables adjusted weighting.
    #[inline]
    #[must_use]
    pub fn adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }
}

impl IndicatorConfigBuilder<SmoothingConfig> for SmoothingConfigBuilder {
    fn build(self) -> SmoothingConfig {
        SmoothingConfig {
            length: self.length.get(),
            source: self.source,
            adjust: self.adjust,
        }
    }
}

/// Configuration for indicators over the high/low/close range:
/// [`Atr`](crate::Atr), [`Stoch`](crate::Stoch) and
/// [`Williams`](crate::Williams).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RangeConfig {
    length: usize,
}

impl IndicatorConfig for RangeConfig {
    type Builder = RangeConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        RangeConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("length", self.length, rows)
    }
}

impl RangeConfig {
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Display for RangeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RangeConfig({})", self.length)
    }
}

/// Builder for [`RangeConfig`].
///
/// Defaults: length = 14.
pub struct RangeConfigBuilder {
    length: NonZero<usize>,
}

impl RangeConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_RANGE_LENGTH,
        }
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length = length;
        self
    }
}

impl IndicatorConfigBuilder<RangeConfig> for RangeConfigBuilder {
    fn build(self) -> RangeConfig {
        RangeConfig {
            length: self.length.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::nz as non_zero;


    mod multiplier {
        use super::*;

        #[test]
        fn defaults_to_two() {
            assert!((Multiplier::default().value() - 2.0).abs() < f64::EPSILON);
        }

        #[test]
        fn rejects_non_positive() {
            assert!(Multiplier::new(0.0).is_err());
            assert!(Multiplier::new(-1.0).is_err());
            assert!(Multiplier::new(f64::NAN).is_err());
            assert!(Multiplier::new(f64::INFINITY).is_err());
        }

        #[test]
        fn equal_by_bits() {
            assert_eq!(Multiplier::new(1.5).unwrap(), Multiplier::new(1.5).unwrap());
            assert_ne!(Multiplier::new(1.5).unwrap(), Multiplier::default());
        }
    }

    mod defaults {
        use super::*;

        #[test]
        fn window_builder() {
            let config = WindowConfig::builder().build();
            assert_eq!(config.length(), 10);
            assert_eq!(config.source(), &Source::Close);
        }

        #[test]
        fn smoothing_builder_adjusts() {
            let config = SmoothingConfig::builder().build();
            assert_eq!(config.length(), 10);
            assert!(config.adjust());
        }

        #[test]
        fn range_builder() {
            assert_eq!(RangeConfig::builder().build().length(), 14);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn length_equal_to_rows_is_valid() {
            assert!(WindowConfig::close(non_zero(5)).validate(5).is_ok());
        }

        #[test]
        fn length_above_rows_is_rejected() {
            let err = SmoothingConfig::close(non_zero(6)).validate(5).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidParameter {
                    name: "length",
                    reason: "6 exceeds series length 5".into()
                }
            );
        }

        #[test]
        fn empty_series_rejects_any_length() {
            assert!(RangeConfig::new(non_zero(1)).validate(0).is_err());
        }
    }

    #[test]
    fn column_constructor_sets_source() {
        let config = WindowConfig::column(non_zero(3), "ema_5");
        assert_eq!(config.source(), &Source::column("ema_5"));
        assert_eq!(config.to_string(), "WindowConfig(3, ema_5)");
    }
}
