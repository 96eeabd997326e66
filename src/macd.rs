use std::{fmt::Display, num::NonZero};

use crate::{
    Indicator, IndicatorConfig, IndicatorConfigBuilder, PriceSeries, Result, Series, Source,
    config::check_length,
    ema::ema,
    series::zip_with,
};

const DEFAULT_FAST: NonZero<usize> = NonZero::new(12).unwrap();
const DEFAULT_SLOW: NonZero<usize> = NonZero::new(26).unwrap();
const DEFAULT_SIGNAL: NonZero<usize> = NonZero::new(9).unwrap();

/// Configuration for the [`Macd`] indicator.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{IndicatorConfig, IndicatorConfigBuilder, MacdConfig};
/// use std::num::NonZero;
///
/// // Defaults: 12 / 26 / 9 on close
/// let config = MacdConfig::default();
/// assert_eq!((config.fast(), config.slow(), config.signal()), (12, 26, 9));
///
/// let config = MacdConfig::builder()
///     .fast(NonZero::new(5).unwrap())
///     .slow(NonZero::new(35).unwrap())
///     .signal(NonZero::new(5).unwrap())
///     .build();
/// assert_eq!(config.to_string(), "MacdConfig(5, 35, 5, close)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct MacdConfig {
    fast: usize,
    slow: usize,
    signal: usize,
    source: Source,
    adjust: bool,
}

impl IndicatorConfig for MacdConfig {
    type Builder = MacdConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        MacdConfigBuilder::new()
    }

    fn validate(&self, rows: usize) -> Result<()> {
        check_length("fast", self.fast, rows)?;
        check_length("slow", self.slow, rows)?;
        check_length("signal", self.signal, rows)
    }
}

impl MacdConfig {
    /// MACD on closing price with the given fast and slow lengths and the
    /// default signal length.
    #[must_use]
    pub fn close(fast: NonZero<usize>, slow: NonZero<usize>) -> Self {
        Self::builder().fast(fast).slow(slow).build()
    }

    #[inline]
    #[must_use]
    pub fn fast(&self) -> usize {
        self.fast
    }

    #[inline]
    #[must_use]
    pub fn slow(&self) -> usize {
        self.slow
    }

    #[inline]
    #[must_use]
    pub fn signal(&self) -> usize {
        self.signal
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

impl Default for MacdConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Display for MacdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MacdConfig({}, {}, {}, {})",
            self.fast, self.slow, self.signal, self.source
        )
    }
}

/// Builder for [`MacdConfig`].
///
/// Defaults: fast = 12, slow = 26, signal = 9, source = [`Source::Close`],
/// adjust = `true`.
pub struct MacdConfigBuilder {
    fast: NonZero<usize>,
    slow: NonZero<usize>,
    signal: NonZero<usize>,
    source: Source,
    adjust: bool,
}

impl MacdConfigBuilder {
    fn new() -> Self {
        Self {
            fast: DEFAULT_FAST,
            slow: DEFAULT_SLOW,
            signal: DEFAULT_SIGNAL,
            source: Source::Close,
            adjust: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn fast(mut self, fast: NonZero<usize>) -> Self {
        self.fast = fast;
        self
    }

    #[inline]
    #[must_use]
    pub fn slow(mut self, slow: NonZero<usize>) -> Self {
        self.slow = slow;
        self
    }

    #[inline]
    #[must_use]
    pub fn signal(mut self, signal: NonZero<usize>) -> Self {
        self.signal = signal;
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
    pub fn adjust(mut self, adjust: bool) -> Self {
        self.adjust = adjust;
        self
    }
}

impl IndicatorConfigBuilder<MacdConfig> for MacdConfigBuilder {
    fn build(self) -> MacdConfig {
        MacdConfig {
            fast: self.fast.get(),
            slow: self.slow.get(),
            signal: self.signal.get(),
            source: self.source,
            adjust: self.adjust,
        }
    }
}

/// The three MACD lines, aligned with the input.
#[derive(Clone, Debug, PartialEq)]
pub struct MacdOutput {
    /// `EMA(fast) - EMA(slow)`.
    pub macd: Series,
    /// EMA of the MACD line over `signal` bars.
    pub signal: Series,
    /// `macd - signal`.
    pub histogram: Series,
}

impl MacdOutput {
    /// The lines in chart order: MACD, signal, histogram.
    #[must_use]
    pub fn into_vec(self) -> Vec<Series> {
        vec![self.macd, self.signal, self.histogram]
    }
}

/// Moving Average Convergence Divergence (MACD).
///
/// All three lines are defined from the first observed input onward.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Macd, MacdConfig, PriceSeries};
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
/// let bars: Vec<Bar> = (0..40_u32).map(|i| Bar(100.0 + f64::from(i), u64::from(i))).collect();
/// let series = PriceSeries::from_bars(&bars);
///
/// let out = Macd::new(MacdConfig::default()).compute(&series).unwrap();
/// assert_eq!(out.macd.name(), "macd_12_26");
/// assert!(out.macd.get(39).unwrap() > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Macd {
    config: MacdConfig,
}

impl Indicator for Macd {
    type Config = MacdConfig;
    type Output = MacdOutput;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn compute(&self, series: &PriceSeries) -> Result<MacdOutput> {
        let input = series.source(&self.config.source)?;
        self.config.validate(input.len())?;

        let adjust = self.config.adjust;
        let fast = ema(input.values(), self.config.fast, adjust);
        let slow = ema(input.values(), self.config.slow, adjust);
        let line = zip_with(&fast, &slow, |f, s| Some(f - s));
        let signal = ema(&line, self.config.signal, adjust);
        let histogram = zip_with(&line, &signal, |l, s| Some(l - s));

        let suffix = self.suffix();
        Ok(MacdOutput {
            macd: Series::new(self.label(), line),
            signal: Series::new(format!("macd_signal{suffix}"), signal),
            histogram: Series::new(format!("macd_difference{suffix}"), histogram),
        })
    }

    fn warm_up(&self) -> usize {
        0
    }

    fn label(&self) -> String {
        format!("macd{}", self.suffix())
    }
}

impl Macd {
    fn suffix(&self) -> String {
        format!(
            "_{}_{}{}",
            self.config.fast,
            self.config.slow,
            self.config.source.label_suffix()
        )
    }
}

impl Display for Macd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MACD({}, {}, {}, {})",
            self.config.fast, self.config.slow, self.config.signal, self.config.source
        )
    }
}
