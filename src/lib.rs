//! Batch technical analysis indicators over static OHLCV series.
//!
//! Load bars into a [`PriceSeries`] once, then compute any number of
//! indicators over it. Every output is a [`Series`] aligned with the input
//! rows, where `None` marks a position with no value (window not yet full,
//! missing input, or a zero denominator).
//!
//! Each indicator type ([`Sma`], [`Ema`], [`Rsi`], [`Macd`], [`Bb`], ...)
//! exposes [`new`](Sma::new), [`compute`](Sma::compute) and
//! [`warm_up`](Sma::warm_up) as inherent methods, no trait import needed.
//! Import [`Indicator`] only for generic code, and [`SingleInput`] to chain
//! one indicator's output into another.
//!
//! For menu-driven callers, [`compute`] dispatches by string key:
//!
//! ```
//! use ohlcv_ta::{IndicatorKind, PriceSeries, compute};
//! # use ohlcv_ta::{Ohlcv, Price, Timestamp};
//! #
//! # struct Bar(f64, u64);
//! # impl Ohlcv for Bar {
//! #     fn open(&self) -> Price { self.0 }
//! #     fn high(&self) -> Price { self.0 + 1.0 }
//! #     fn low(&self) -> Price { self.0 - 1.0 }
//! #     fn close(&self) -> Price { self.0 }
//! #     fn volume(&self) -> f64 { 100.0 }
//! #     fn open_time(&self) -> Timestamp { self.1 }
//! # }
//!
//! let bars: Vec<Bar> = (0..30_u32).map(|i| Bar(f64::from(i % 7), u64::from(i))).collect();
//! let mut series = PriceSeries::from_bars(&bars);
//!
//! let requests: [(&str, &[i64]); 3] = [("rsi", &[14]), ("bbands", &[20]), ("macd", &[12, 26])];
//! for (key, periods) in requests {
//!     let kind: IndicatorKind = key.parse().unwrap();
//!     series.extend_columns(kind.compute(&series, periods).unwrap()).unwrap();
//! }
//!
//! assert!(series.column("rsi_14").is_ok());
//! assert!(series.column("macd_signal_12_26").is_ok());
//! assert!(compute(&series, "vwap", &[5]).is_err());
//! ```

mod atr;
mod bb;
mod config;
mod dema;
mod ema;
mod error;
mod ewm;
mod indicator;
mod kc;
mod macd;
mod mom;
mod ohlcv;
mod price_series;
mod price_source;
mod registry;
mod roc;
mod rsi;
mod series;
mod sma;
mod smm;
mod smma;
mod ssma;
mod stoch;
mod tema;
mod tr;
mod trima;
mod trix;
mod vama;
mod williams;
mod window;
mod wma;

pub use crate::config::{
    Multiplier, RangeConfig, RangeConfigBuilder, SmoothingConfig, SmoothingConfigBuilder,
    WindowConfig, WindowConfigBuilder,
};
pub use crate::error::{Error, Result};
pub use crate::indicator::{Indicator, IndicatorConfig, IndicatorConfigBuilder, SingleInput};
pub use crate::ohlcv::{Ohlcv, Price, Timestamp};
pub use crate::price_series::{OhlcvColumns, PriceSeries};
pub use crate::price_source::Source;
pub use crate::registry::{IndicatorKind, compute};
pub use crate::series::Series;

pub use crate::atr::{Atr, AtrConfig};
pub use crate::bb::{Bb, BbConfig, BbConfigBuilder, BbOutput};
pub use crate::dema::{Dema, DemaConfig};
pub use crate::ema::{Ema, EmaConfig};
pub use crate::kc::{Kc, KcConfig, KcConfigBuilder, KcOutput};
pub use crate::macd::{Macd, MacdConfig, MacdConfigBuilder, MacdOutput};
pub use crate::mom::{Mom, MomConfig};
pub use crate::roc::{Roc, RocConfig};
pub use crate::rsi::{Rsi, RsiConfig};
pub use crate::sma::{Sma, SmaConfig};
pub use crate::smm::{Smm, SmmConfig};
pub use crate::smma::{Smma, SmmaConfig};
pub use crate::ssma::{Ssma, SsmaConfig};
pub use crate::stoch::{Stoch, StochConfig};
pub use crate::tema::{Tema, TemaConfig};
pub use crate::tr::{Tr, TrConfig, TrConfigBuilder};
pub use crate::trima::{Trima, TrimaConfig};
pub use crate::trix::{Trix, TrixConfig};
pub use crate::vama::{Vama, VamaConfig};
pub use crate::williams::{Williams, WilliamsConfig};
pub use crate::wma::{Wma, WmaConfig};

macro_rules! impl_indicator_methods {
    ($type:ty, $config:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Indicator>::new(config)
            }

            /// See [`Indicator::compute`].
            ///
            /// # Errors
            ///
            /// As [`Indicator::compute`].
            #[inline]
            pub fn compute(&self, series: &PriceSeries) -> Result<$output> {
                <Self as Indicator>::compute(self, series)
            }

            /// See [`Indicator::warm_up`].
            #[must_use]
            #[inline]
            pub fn warm_up(&self) -> usize {
                <Self as Indicator>::warm_up(self)
            }
        }
    };
}

impl_indicator_methods!(Sma, SmaConfig, Series);
impl_indicator_methods!(Smm, SmmConfig, Series);
impl_indicator_methods!(Ssma, SsmaConfig, Series);
impl_indicator_methods!(Ema, EmaConfig, Series);
impl_indicator_methods!(Dema, DemaConfig, Series);
impl_indicator_methods!(Tema, TemaConfig, Series);
impl_indicator_methods!(Trima, TrimaConfig, Series);
impl_indicator_methods!(Trix, TrixConfig, Series);
impl_indicator_methods!(Vama, VamaConfig, Series);
impl_indicator_methods!(Wma, WmaConfig, Series);
impl_indicator_methods!(Smma, SmmaConfig, Series);
impl_indicator_methods!(Mom, MomConfig, Series);
impl_indicator_methods!(Roc, RocConfig, Series);
impl_indicator_methods!(Rsi, RsiConfig, Series);
impl_indicator_methods!(Tr, TrConfig, Series);
impl_indicator_methods!(Atr, AtrConfig, Series);
impl_indicator_methods!(Stoch, StochConfig, Series);
impl_indicator_methods!(Williams, WilliamsConfig, Series);
impl_indicator_methods!(Macd, MacdConfig, MacdOutput);
impl_indicator_methods!(Bb, BbConfig, BbOutput);
impl_indicator_methods!(Kc, KcConfig, KcOutput);

#[cfg(test)]
mod test_util;

#[cfg(test)]
mod inherent_methods {
    use super::{Bb, BbConfig, Macd, MacdConfig, Sma, SmaConfig, Tr, TrConfig};
    use crate::test_util::{nz, series_of};

    #[test]
    fn sma_without_indicator_import() {
        let sma = Sma::new(SmaConfig::close(nz(2)));
        let out = sma.compute(&series_of(&[10.0, 20.0])).unwrap();
        assert_eq!(out.values(), &[None, Some(15.0)]);
        assert_eq!(sma.warm_up(), 1);
    }

    #[test]
    fn macd_without_indicator_import() {
        let macd = Macd::new(MacdConfig::close(nz(2), nz(3)));
        let out = macd.compute(&series_of(&[1.0; 10])).unwrap();
        assert_eq!(out.histogram.first_defined(), Some(macd.warm_up()));
    }

    #[test]
    fn bb_without_indicator_import() {
        let bb = Bb::new(BbConfig::close(nz(2)));
        assert!(bb.compute(&series_of(&[1.0, 2.0])).unwrap().upper.get(1).is_some());
    }

    #[test]
    fn tr_without_indicator_import() {
        let out = Tr::new(TrConfig).compute(&series_of(&[1.0, 2.0])).unwrap();
        assert_eq!(out.values(), &[None, Some(1.0)]);
    }
}
