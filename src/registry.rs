use std::{fmt::Display, num::NonZero, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Atr, AtrConfig, Bb, BbConfig, Dema, DemaConfig, Ema, EmaConfig, Error, Kc, KcConfig, Macd,
    MacdConfig, Mom, MomConfig, PriceSeries, Result, Roc, RocConfig, Rsi, RsiConfig, Series, Sma,
    SmaConfig, Smm, SmmConfig, Smma, SmmaConfig, Ssma, SsmaConfig, Stoch, StochConfig, Tema,
    TemaConfig, Tr, Trima, TrimaConfig, Trix, TrixConfig, Vama, VamaConfig, Williams,
    WilliamsConfig, Wma, WmaConfig,
};

/// Every indicator reachable by string key.
///
/// Parsing is case-insensitive and ignores surrounding whitespace. An
/// unrecognised key is an [`Error::UnknownIndicator`]; a recognised key with
/// bad periods is an [`Error::InvalidParameter`].
///
/// # Example
///
/// ```
/// use ohlcv_ta::IndicatorKind;
///
/// let kind: IndicatorKind = " MACD ".parse().unwrap();
/// assert_eq!(kind, IndicatorKind::Macd);
/// assert_eq!(kind.arity(), 2);
/// assert!(!kind.is_overlay());
///
/// assert!("vwap".parse::<IndicatorKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum IndicatorKind {
    Volume,
    Sma,
    Smm,
    Ssma,
    Ema,
    Dema,
    Tema,
    Trima,
    Trix,
    Vama,
    Wma,
    Smma,
    Macd,
    Mom,
    Roc,
    Rsi,
    Tr,
    Atr,
    Bbands,
    Kc,
    Stoch,
    Williams,
}

impl IndicatorKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 22] = [
        Self::Volume,
        Self::Sma,
        Self::Smm,
        Self::Ssma,
        Self::Ema,
        Self::Dema,
        Self::Tema,
        Self::Trima,
        Self::Trix,
        Self::Vama,
        Self::Wma,
        Self::Smma,
        Self::Macd,
        Self::Mom,
        Self::Roc,
        Self::Rsi,
        Self::Tr,
        Self::Atr,
        Self::Bbands,
        Self::Kc,
        Self::Stoch,
        Self::Williams,
    ];

    /// Lowercase dispatch key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Sma => "sma",
            Self::Smm => "smm",
            Self::Ssma => "ssma",
            Self::Ema => "ema",
            Self::Dema => "dema",
            Self::Tema => "tema",
            Self::Trima => "trima",
            Self::Trix => "trix",
            Self::Vama => "vama",
            Self::Wma => "wma",
            Self::Smma => "smma",
            Self::Macd => "macd",
            Self::Mom => "mom",
            Self::Roc => "roc",
            Self::Rsi => "rsi",
            Self::Tr => "tr",
            Self::Atr => "atr",
            Self::Bbands => "bbands",
            Self::Kc => "kc",
            Self::Stoch => "stoch",
            Self::Williams => "williams",
        }
    }

    /// Number of integer periods [`compute`](Self::compute) expects.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Volume | Self::Tr => 0,
            Self::Macd => 2,
            _ => 1,
        }
    }

    /// Whether the output shares the price pane (`true`) or needs a pane of
    /// its own.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        !matches!(
            self,
            Self::Macd
                | Self::Mom
                | Self::Roc
                | Self::Rsi
                | Self::Tr
                | Self::Atr
                | Self::Stoch
                | Self::Williams
                | Self::Trix
        )
    }

    /// Computes this indicator on the closing price with the given periods
    /// and default settings for everything else.
    ///
    /// `macd` takes `[fast, slow]` with a signal length of 9; `volume` and
    /// `tr` take none. Output series are in chart order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when the number of periods does not match
    /// [`arity`](Self::arity), a period is zero or negative, or a period
    /// exceeds the series length.
    pub fn compute(self, series: &PriceSeries, periods: &[i64]) -> Result<Vec<Series>> {
        debug!(indicator = self.key(), ?periods, rows = series.len(), "computing indicator");

        if periods.len() != self.arity() {
            return Err(Error::invalid_parameter(
                "periods",
                format!(
                    "{} takes {} period(s), got {}",
                    self.key(),
                    self.arity(),
                    periods.len()
                ),
            ));
        }

        let single = || period("period", periods[0]);

        let out = match self {
            Self::Volume => vec![series.volume().clone()],
            Self::Tr => vec![Tr::default().compute(series)?],
            Self::Sma => vec![Sma::new(SmaConfig::close(single()?)).compute(series)?],
            Self::Smm => vec![Smm::new(SmmConfig::close(single()?)).compute(series)?],
            Self::Ssma => vec![Ssma::new(SsmaConfig::close(single()?)).compute(series)?],
            Self::Ema => vec![Ema::new(EmaConfig::close(single()?)).compute(series)?],
            Self::Dema => vec![Dema::new(DemaConfig::close(single()?)).compute(series)?],
            Self::Tema => vec![Tema::new(TemaConfig::close(single()?)).compute(series)?],
            Self::Trima => vec![Trima::new(TrimaConfig::close(single()?)).compute(series)?],
            Self::Trix => vec![Trix::new(TrixConfig::close(single()?)).compute(series)?],
            Self::Vama => vec![Vama::new(VamaConfig::close(single()?)).compute(series)?],
            Self::Wma => vec![Wma::new(WmaConfig::close(single()?)).compute(series)?],
            Self::Smma => vec![Smma::new(SmmaConfig::close(single()?)).compute(series)?],
            Self::Mom => vec![Mom::new(MomConfig::close(single()?)).compute(series)?],
            Self::Roc => vec![Roc::new(RocConfig::close(single()?)).compute(series)?],
            Self::Rsi => vec![Rsi::new(RsiConfig::close(single()?)).compute(series)?],
            Self::Atr => vec![Atr::new(AtrConfig::new(single()?)).compute(series)?],
            Self::Stoch => vec![Stoch::new(StochConfig::new(single()?)).compute(series)?],
            Self::Williams => {
                vec![Williams::new(WilliamsConfig::new(single()?)).compute(series)?]
            }
            Self::Macd => {
                let fast = period("fast", periods[0])?;
                let slow = period("slow", periods[1])?;
                let config = MacdConfig::close(fast, slow);
                Macd::new(config).compute(series)?.into_vec()
            }
            Self::Bbands => Bb::new(BbConfig::close(single()?)).compute(series)?.into_vec(),
            Self::Kc => Kc::new(KcConfig::new(single()?))
                .compute(series)?
                .into_channel(),
        };

        Ok(out)
    }
}

/// Converts a raw period into a window length.
fn period(name: &'static str, value: i64) -> Result<NonZero<usize>> {
    usize::try_from(value)
        .ok()
        .and_then(NonZero::new)
        .ok_or_else(|| Error::invalid_parameter(name, format!("{value} is not a positive period")))
}

impl FromStr for IndicatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownIndicator(key.to_string()))
    }
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Computes an indicator by string key.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{PriceSeries, compute};
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
/// let series = PriceSeries::from_bars(&[Bar(1.0, 1), Bar(2.0, 2), Bar(4.0, 3)]);
///
/// let out = compute(&series, "sma", &[2]).unwrap();
/// assert_eq!(out[0].name(), "sma_2");
/// assert_eq!(out[0].values(), &[None, Some(1.5), Some(3.0)]);
/// ```
///
/// # Errors
///
/// [`Error::UnknownIndicator`] for a key outside [`IndicatorKind::ALL`],
/// otherwise as [`IndicatorKind::compute`].
pub fn compute(series: &PriceSeries, key: &str, periods: &[i64]) -> Result<Vec<Series>> {
    key.parse::<IndicatorKind>()?.compute(series, periods)
}
