use std::{fmt::Display, num::NonZero};

use crate::{
    Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, Multiplier, Price, PriceSeries,
    Result, Series, Source,
    config::check_length,
    series::zip_with,
    sma::sma,
    window::{rolling, sample_std},
};

const DEFAULT_LENGTH: NonZero<usize> = NonZero::new(14).unwrap();

/// Configuration for the Bollinger Bands ([`Bb`]) indicator.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{BbConfig, IndicatorConfig, IndicatorConfigBuilder, Multiplier};
/// use std::num::NonZero;
///
/// // Default: length 14, close, 2.0 standard deviations
/// let config = BbConfig::builder()
///     .length(NonZero::new(20).unwrap())
///     .multiplier(Multiplier::new(2.5).unwrap())
///     .build();
///
/// assert_eq!(config.length(), 20);
/// assert_eq!(config.to_string(), "BbConfig(20, close, 2.5)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct BbConfig {
    length: usize,
    source: Source,
    multiplier: Multiplier,
}

impl IndicatorConfig for BbConfig {
    type Builder = BbConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BbConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("length", self.length, rows)
    }
}

impl BbConfig {
    /// Bands on closing price, 2 standard deviations wide.
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

    /// Standard deviation multiplier for the upper and lower bands.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }
}

impl Display for BbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BbConfig({}, {}, {})",
            self.length,
            self.source,
            self.multiplier.value()
        )
    }
}

/// Builder for [`BbConfig`].
///
/// Defaults: length = 14, source = [`Source::Close`], multiplier = `2.0`.
pub struct BbConfigBuilder {
    length: NonZero<usize>,
    source: Source,
    multiplier: Multiplier,
}

impl BbConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            source: Source::Close,
            multiplier: Multiplier::default(),
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

    #[inline]
    #[must_use]
    pub fn multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl IndicatorConfigBuilder<BbConfig> for BbConfigBuilder {
    fn build(self) -> BbConfig {
        BbConfig {
            length: self.length.get(),
            source: self.source,
            multiplier: self.multiplier,
        }
    }
}

/// Bollinger Bands output: upper, middle, and lower bands.
///
/// ```text
/// upper  = middle + k × σ
/// middle = SMA (or a caller supplied line)
/// lower  = middle − k × σ
/// ```
///
/// `σ` is the sample standard deviation (`n - 1` denominator) of the input
/// over the window.
#[derive(Clone, Debug, PartialEq)]
pub struct BbOutput {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl BbOutput {
    /// The bands in chart order: upper, middle, lower.
    #[must_use]
    pub fn into_vec(self) -> Vec<Series> {
        vec![self.upper, self.middle, self.lower]
    }
}

/// Bollinger Bands (BB).
///
/// A volatility envelope: a simple moving average with upper and lower
/// bands offset by a number of standard deviations. Every band starts at
/// position `length - 1`. A window of one value has no standard deviation,
/// so with `length = 1` only the middle band is defined.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Bb, BbConfig, PriceSeries};
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
/// let series = PriceSeries::from_bars(&[Bar(1.0, 1), Bar(3.0, 2)]);
/// let bb = Bb::new(BbConfig::close(NonZero::new(2).unwrap()));
///
/// let out = bb.compute(&series).unwrap();
/// // mean 2, sample σ = √2
/// assert_eq!(out.middle.get(1), Some(2.0));
/// assert!((out.upper.get(1).unwrap() - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Bb {
    config: BbConfig,
}

impl Indicator for Bb {
    type Config = BbConfig;
    type Output = BbOutput;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<BbOutput> {
        let input = series.source(&self.config.source)?;
        self.config.validate(input.len())?;

        let middle = sma(input.values(), self.config.length);
        Ok(self.bands(&input, middle))
    }

    fn warm_up(&self) -> usize {
        self.config.length - 1
    }

    fn label(&self) -> String {
        format!("middle_bb{}", self.suffix())
    }
}

impl Bb {
    /// Computes the bands around a caller-supplied middle line instead of
    /// the SMA. The standard deviation is still taken over the configured
    /// source.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] when `middle` is not aligned with `series`,
    /// plus everything [`compute`](Indicator::compute) returns.
    pub fn compute_with_middle(&self, series: &PriceSeries, middle: &Series) -> Result<BbOutput> {
        if middle.len() != series.len() {
            return Err(Error::ShapeMismatch {
                column: middle.name().to_string(),
                expected: series.len(),
                actual: middle.len(),
            });
        }

        let input = series.source(&self.config.source)?;
        self.config.validate(input.len())?;

        Ok(self.bands(&input, middle.values().to_vec()))
    }

    fn bands(&self, input: &Series, middle: Vec<Option<Price>>) -> BbOutput {
        let k = self.config.multiplier.value();
        let width = rolling(input.values(), self.config.length, sample_std);

        let upper = zip_with(&middle, &width, |m, sd| Some(k.mul_add(sd, m)));
        let lower = zip_with(&middle, &width, |m, sd| Some((-k).mul_add(sd, m)));

        let suffix = self.suffix();
        BbOutput {
            upper: Series::new(format!("upper_bb{suffix}"), upper),
            middle: Series::new(format!("middle_bb{suffix}"), middle),
            lower: Series::new(format!("lower_bb{suffix}"), lower),
        }
    }

    fn suffix(&self) -> String {
        format!(
            "_{}{}",
            self.config.length,
            self.config.source.label_suffix()
        )
    }
}

impl Display for Bb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BB({}, {}, {})",
            self.config.length,
            self.config.multiplier.value(),
            self.config.source
        )
    }
}
