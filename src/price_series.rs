use std::borrow::Cow;

use tracing::trace;

use crate::{
    Error, Ohlcv, Price, Result, Series, Source, Timestamp,
    series::{finite, zip_with},
};

const BASE_COLUMNS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Raw OHLCV columns for [`PriceSeries::from_columns`].
///
/// Values are expected to be numeric already; `None` and non-finite
/// numbers both become "no value" positions.
#[derive(Clone, Debug, Default)]
pub struct OhlcvColumns {
    pub open: Vec<Option<Price>>,
    pub high: Vec<Option<Price>>,
    pub low: Vec<Option<Price>>,
    pub close: Vec<Option<Price>>,
    pub volume: Vec<Option<Price>>,
}

/// The OHLCV table.
///
/// Rows are addressed by position only. The five base columns are fixed at
/// construction; the table grows only by attaching named derived columns of
/// the same length, which may in turn feed other indicators through
/// [`Source::Column`].
///
/// # Example
///
/// ```
/// use ohlcv_ta::{Indicator, PriceSeries, Series, Source, Sma, SmaConfig};
/// use std::num::NonZero;
/// # use ohlcv_ta::{Ohlcv, Price, Timestamp};
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
/// let mut series: PriceSeries = [Bar(1.0, 1), Bar(2.0, 2), Bar(3.0, 3)].into_iter().collect();
///
/// let sma = Sma::new(SmaConfig::close(NonZero::new(2).unwrap()));
/// let out = sma.compute(&series).unwrap();
/// assert_eq!(out.name(), "sma_2");
///
/// series.insert_column(out).unwrap();
/// assert_eq!(series.column("sma_2").unwrap().get(2), Some(2.5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PriceSeries {
    time: Vec<Timestamp>,
    open: Series,
    high: Series,
    low: Series,
    close: Series,
    volume: Series,
    derived: Vec<Series>,
}

impl PriceSeries {
    /// Builds the table from caller bar types.
    #[must_use]
    pub fn from_bars<B: Ohlcv>(bars: &[B]) -> Self {
        bars.iter().collect()
    }

    /// Builds the table from pre-coerced columns.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if any column length differs from `time`.
    pub fn from_columns(time: Vec<Timestamp>, columns: OhlcvColumns) -> Result<Self> {
        let rows = time.len();
        let OhlcvColumns {
            open,
            high,
            low,
            close,
            volume,
        } = columns;

        let build = |name: &str, values: Vec<Option<Price>>| {
            if values.len() == rows {
                Ok(Series::new(name, values.into_iter().map(|v| v.and_then(finite)).collect()))
            } else {
                Err(Error::ShapeMismatch {
                    column: name.to_string(),
                    expected: rows,
                    actual: values.len(),
                })
            }
        };

        let open = build("open", open)?;
        let high = build("high", high)?;
        let low = build("low", low)?;
        let close = build("close", close)?;
        let volume = build("volume", volume)?;

        debug_assert_time_order(&time);

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
            derived: Vec::new(),
        })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> &[Timestamp] {
        &self.time
    }

    #[inline]
    #[must_use]
    pub fn open(&self) -> &Series {
        &self.open
    }

    #[inline]
    #[must_use]
    pub fn high(&self) -> &Series {
        &self.high
    }

    #[inline]
    #[must_use]
    pub fn low(&self) -> &Series {
        &self.low
    }

    #[inline]
    #[must_use]
    pub fn close(&self) -> &Series {
        &self.close
    }

    #[inline]
    #[must_use]
    pub fn volume(&self) -> &Series {
        &self.volume
    }

    /// Looks up a base or derived column by name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColumn`] if no column has that name.
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.base(name)
            .or_else(|| self.derived.iter().find(|s| s.name() == name))
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Base column names followed by derived ones, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        BASE_COLUMNS
            .into_iter()
            .chain(self.derived.iter().map(Series::name))
    }

    /// Attaches a derived column.
    ///
    /// A derived column with the same name is replaced.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the column length differs from the row
    /// count, [`Error::DuplicateColumn`] if the name is a base column.
    pub fn insert_column(&mut self, series: Series) -> Result<()> {
        if series.len() != self.len() {
            return Err(Error::ShapeMismatch {
                column: series.name().to_string(),
                expected: self.len(),
                actual: series.len(),
            });
        }

        if BASE_COLUMNS.contains(&series.name()) {
            return Err(Error::DuplicateColumn(series.name().to_string()));
        }

        if let Some(existing) = self.derived.iter_mut().find(|s| s.name() == series.name()) {
            trace!(column = series.name(), "replacing derived column");
            *existing = series;
        } else {
            trace!(column = series.name(), rows = self.len(), "attaching derived column");
            self.derived.push(series);
        }

        Ok(())
    }

    /// Attaches every column, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`insert_column`](Self::insert_column).
    pub fn extend_columns(&mut self, columns: impl IntoIterator<Item = Series>) -> Result<()> {
        columns
            .into_iter()
            .try_for_each(|series| self.insert_column(series))
    }

    /// Resolves an indicator input column.
    ///
    /// Base and derived columns are borrowed; composite prices are computed.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColumn`] for a [`Source::Column`] that is not attached.
    pub fn source(&self, source: &Source) -> Result<Cow<'_, Series>> {
        let values = match source {
            Source::Open => return Ok(Cow::Borrowed(&self.open)),
            Source::High => return Ok(Cow::Borrowed(&self.high)),
            Source::Low => return Ok(Cow::Borrowed(&self.low)),
            Source::Close => return Ok(Cow::Borrowed(&self.close)),
            Source::Volume => return Ok(Cow::Borrowed(&self.volume)),
            Source::Column(name) => return self.column(name).map(Cow::Borrowed),
            Source::HL2 => zip_with(self.high.values(), self.low.values(), |h, l| {
                Some(f64::midpoint(h, l))
            }),
            Source::HLC3 => {
                let hl = zip_with(self.high.values(), self.low.values(), |h, l| Some(h + l));
                zip_with(&hl, self.close.values(), |hl, c| Some((hl + c) / 3.0))
            }
            Source::OHLC4 => {
                let oh = zip_with(self.open.values(), self.high.values(), |o, h| Some(o + h));
                let ohl = zip_with(&oh, self.low.values(), |oh, l| Some(oh + l));
                zip_with(&ohl, self.close.values(), |ohl, c| Some((ohl + c) / 4.0))
            }
            Source::HLCC4 => {
                let hl = zip_with(self.high.values(), self.low.values(), |h, l| Some(h + l));
                zip_with(&hl, self.close.values(), |hl, c| Some((hl + c + c) / 4.0))
            }
        };

        Ok(Cow::Owned(Series::new(source.name(), values)))
    }

    fn base(&self, name: &str) -> Option<&Series> {
        match name {
            "open" => Some(&self.open),
            "high" => Some(&self.high),
            "low" => Some(&self.low),
            "close" => Some(&self.close),
            "volume" => Some(&self.volume),
            _ => None,
        }
    }
}

impl<B: Ohlcv> FromIterator<B> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut time = Vec::with_capacity(lower);
        let mut columns: [Vec<Price>; 5] = std::array::from_fn(|_| Vec::with_capacity(lower));

        for bar in iter {
            time.push(bar.open_time());
            columns[0].push(bar.open());
            columns[1].push(bar.high());
            columns[2].push(bar.low());
            columns[3].push(bar.close());
            columns[4].push(bar.volume());
        }

        debug_assert_time_order(&time);

        let [open, high, low, close, volume] = columns;

        Self {
            time,
            open: Series::from_prices("open", open),
            high: Series::from_prices("high", high),
            low: Series::from_prices("low", low),
            close: Series::from_prices("close", close),
            volume: Series::from_prices("volume", volume),
            derived: Vec::new(),
        }
    }
}

fn debug_assert_time_order(time: &[Timestamp]) {
    debug_assert!(
        time.windows(2).all(|w| w[0] <= w[1]),
        "open_time must be non-decreasing"
    );
}
