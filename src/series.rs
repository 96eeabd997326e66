use crate::Price;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, positionally aligned sequence of optional prices.
///
/// Both the base OHLCV columns of a [`PriceSeries`](crate::PriceSeries) and
/// every indicator output are `Series`. `None` marks a position with no
/// value: the lookback window is not yet full, an input was missing, or a
/// denominator was zero. It is never conflated with a computed `0.0`.
///
/// # Example
///
/// ```
/// use ohlcv_ta::Series;
///
/// let s = Series::new("sma_2", vec![None, Some(1.5), Some(2.5)]);
/// assert_eq!(s.first_defined(), Some(1));
/// assert_eq!(s.get(2), Some(2.5));
/// assert_eq!(s.get(0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    name: String,
    values: Vec<Option<Price>>,
}

impl Series {
    /// Creates a series from already optional values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Option<Price>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates a series from raw prices, mapping non-finite values to `None`.
    #[must_use]
    pub fn from_prices(name: impl Into<String>, prices: impl IntoIterator<Item = Price>) -> Self {
        Self::new(name, prices.into_iter().map(finite).collect())
    }

    /// Column name, also used as chart label.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` when out of range or undefined.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Price> {
        self.values.get(index).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Option<Price>] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Price>> + '_ {
        self.values.iter().copied()
    }

    /// Defined positions as `(index, value)` pairs.
    pub fn defined(&self) -> impl Iterator<Item = (usize, Price)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }

    /// Index of the first defined value.
    #[must_use]
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    /// Returns the same values under a new name.
    #[must_use]
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: self.values,
        }
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Option<Price>> {
        self.values
    }
}

/// Maps non-finite arithmetic results to the "no value" marker.
#[inline]
pub(crate) fn finite(value: Price) -> Option<Price> {
    value.is_finite().then_some(value)
}

/// `numerator / denominator`, `None` on a zero denominator.
#[inline]
pub(crate) fn ratio(numerator: Price, denominator: Price) -> Option<Price> {
    if denominator == 0.0 {
        None
    } else {
        finite(numerator / denominator)
    }
}

/// Element-wise combination of two aligned columns; `None` wherever either
/// side is `None`.
pub(crate) fn zip_with(
    a: &[Option<Price>],
    b: &[Option<Price>],
    f: impl Fn(Price, Price) -> Option<Price>,
) -> Vec<Option<Price>> {
    debug_assert_eq!(a.len(), b.len(), "zip_with requires aligned columns");
    a.iter()
        .zip(b)
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => f(*a, *b),
            _ => None,
        })
        .collect()
}

/// Element-wise transform of a single column.
pub(crate) fn map(values: &[Option<Price>], f: impl Fn(Price) -> Option<Price>) -> Vec<Option<Price>> {
    values.iter().map(|v| v.and_then(&f)).collect()
}

/// Pairs each value with the one `lag` positions earlier.
///
/// The first `lag` positions are `None`.
pub(crate) fn lagged(
    values: &[Option<Price>],
    lag: usize,
    f: impl Fn(Price, Price) -> Option<Price>,
) -> Vec<Option<Price>> {
    (0..values.len())
        .map(|i| {
            let prev = i.checked_sub(lag).and_then(|j| values[j])?;
            f(values[i]?, prev)
        })
        .collect()
}
