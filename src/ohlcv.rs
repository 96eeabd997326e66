/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Bar open timestamp or sequence number.
///
/// Orders the rows of a [`PriceSeries`](crate::PriceSeries). Must be
/// non-decreasing from one bar to the next.
pub type Timestamp = u64;

/// OHLCV bar data used to build a [`PriceSeries`](crate::PriceSeries).
///
/// Implement this on your own kline/candle type to load a whole history
/// without an intermediate copy into a crate-specific struct.
///
/// Non-finite values (`NaN`, `±inf`) are treated as missing when the
/// series is built: they become "no value" positions rather than numbers
/// that silently poison every window touching them.
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Ohlcv, Price, PriceSeries, Timestamp};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64, v: f64,
///     ts: u64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn volume(&self) -> f64 { self.v }
///     fn open_time(&self) -> Timestamp { self.ts }
/// }
///
/// let klines = [
///     MyKline { o: 1.0, h: 2.0, l: 0.5, c: 1.5, v: 10.0, ts: 1 },
///     MyKline { o: 1.5, h: 2.5, l: 1.0, c: 2.0, v: 12.0, ts: 2 },
/// ];
/// let series = PriceSeries::from_bars(&klines);
/// assert_eq!(series.len(), 2);
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Traded volume during the bar.
    fn volume(&self) -> f64;

    /// Bar open timestamp or sequence number.
    fn open_time(&self) -> Timestamp;
}

impl<B: Ohlcv + ?Sized> Ohlcv for &B {
    fn open(&self) -> Price {
        (**self).open()
    }

    fn high(&self) -> Price {
        (**self).high()
    }

    fn low(&self) -> Price {
        (**self).low()
    }

    fn close(&self) -> Price {
        (**self).close()
    }

    fn volume(&self) -> f64 {
        (**self).volume()
    }

    fn open_time(&self) -> Timestamp {
        (**self).open_time()
    }
}
