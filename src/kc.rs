use std::{fmt::Display, num::NonZero};

use crate::{
    Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, Multiplier, Price, PriceSeries,
    Result, Series,
    atr::atr,
    config::check_length,
    ema::ema,
    series::zip_with,
};

const DEFAULT_LENGTH: NonZero<usize> = NonZero::new(20).unwrap();
const DEFAULT_ATR_LENGTH: NonZero<usize> = NonZero::new(10).unwrap();

/// Configuration for the Keltner Channels ([`Kc`]) indicator.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{IndicatorConfig, IndicatorConfigBuilder, KcConfig};
/// use std::num::NonZero;
///
/// let config = KcConfig::builder()
///     .atr_length(NonZero::new(14).unwrap())
///     .build();
///
/// assert_eq!(config.length(), 20);
/// assert_eq!(config.atr_length(), 14);
/// assert_eq!(config.to_string(), "KcConfig(20, 14, 2)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct KcConfig {
    length: usize,
    atr_length: usize,
    multiplier: Multiplier,
    adjust: bool,
}

impl IndicatorConfig for KcConfig {
    type Builder = KcConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        KcConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("length", self.length, rows)?;
        check_length("atr_length", self.atr_length, rows)
    }
}

impl KcConfig {
    /// Channels with the given EMA length and the default ATR length and
    /// multiplier.
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    /// Length of the EMA middle line.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn atr_length(&self) -> usize {
        self.atr_length
    }

    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    #[inline]
    #[must_use]
    pub fn adjust(&self) -> bool {
        self.adjust
    }
}

impl Display for KcConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KcConfig({}, {}, {})",
            self.length,
            self.atr_length,
            self.multiplier.value()
        )
    }
}

/// Builder for [`KcConfig`].
///
/// Defaults: length = 20, ATR length = 10, multiplier = `2.0`,
/// adjust = `true`.
pub struct KcConfigBuilder {
    length: NonZero<usize>,
    atr_length: NonZero<usize>,
    multiplier: Multiplier,
    adjust: bool,
}

impl KcConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            atr_length: DEFAULT_ATR_LENGTH,
            multiplier: Multiplier::default(),
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
    pub fn atr_length(mut self, atr_length: NonZero<usize>) -> Self {
        self.atr_length = atr_length;
        self
    }

    #[inline]
    #[must_use]
    pub fn multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Adjusted weighting for the EMA middle line.
    #[inline]
    #[must_use]
    pub fn adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }
}

impl IndicatorConfigBuilder<KcConfig> for KcConfigBuilder {
    fn build(self) -> KcConfig {
        KcConfig {
            length: self.length.get(),
            atr_length: self.atr_length.get(),
            multiplier: self.multiplier,
            adjust: self.adjust,
        }
    }
}

/// Keltner Channels output.
#[derive(Clone, Debug, PartialEq)]
pub struct KcOutput {
    /// `middle + k × ATR`.
    pub upper: Series,
    /// EMA of close, or a caller-supplied line.
    pub middle: Series,
    /// `middle − k × ATR`.
    pub lower: Series,
}

impl KcOutput {
    /// The outer channel lines: upper, lower.
    #[must_use]
    pub fn into_channel(self) -> Vec<Series> {
        vec![self.upper, self.lower]
    }
}

/// Keltner Channels (KC).
///
/// An EMA of close wrapped by `multiplier` times the
/// [`Atr`](crate::Atr). The middle line is defined from the first bar; the
/// outer lines start where the ATR does, at position `atr_length`.
#[derive(Clone, Debug)]
pub struct Kc {
    config: KcConfig,
}

impl Indicator for Kc {
    type Config = KcConfig;
    type Output = KcOutput;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<KcOutput> {
        self.config.validate(series.len())?;

        let middle = ema(
            series.close().values(),
            self.config.length,
            self.config.adjust,
        );
        Ok(self.channel(series, middle))
    }

    fn warm_up(&self) -> usize {
        self.config.atr_length
    }

    fn label(&self) -> String {
        format!("kc_middle_{}", self.config.length)
    }
}

impl Kc {
    /// Computes the channel around a caller-supplied middle line instead of
    /// the EMA.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] when `middle` is not aligned with `series`,
    /// plus everything [`compute`](Indicator::compute) returns.
    pub fn compute_with_middle(&self, series: &PriceSeries, middle: &Series) -> Result<KcOutput> {
        if middle.len() != series.len() {
            return Err(Error::ShapeMismatch {
                column: middle.name().to_string(),
                expected: series.len(),
                actual: middle.len(),
            });
        }
        self.config.validate(series.len())?;

        Ok(self.channel(series, middle.values().to_vec()))
    }

    fn channel(&self, series: &PriceSeries, middle: Vec<Option<Price>>) -> KcOutput {
        let k = self.config.multiplier.value();
        let range = atr(series, self.config.atr_length);

        let upper = zip_with(&middle, &range, |m, r| Some(k.mul_add(r, m)));
        let lower = zip_with(&middle, &range, |m, r| Some((-k).mul_add(r, m)));

        let length = self.config.length;
        KcOutput {
            upper: Series::new(format!("kc_up_{length}"), upper),
            middle: Series::new(self.label(), middle),
            lower: Series::new(format!("kc_down_{length}"), lower),
        }
    }
}

impl Display for Kc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KC({}, {}, {})",
            self.config.length,
            self.config.atr_length,
            self.config.multiplier.value()
        )
    }
}
