use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input column an indicator is computed on.
///
/// Resolved against a [`PriceSeries`](crate::PriceSeries) with
/// [`PriceSeries::source`](crate::PriceSeries::source). Composite sources
/// are `None` at every position where one of their components is `None`.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Source {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Traded volume.
    Volume,
    /// Median price: `(high + low) / 2`.
    HL2,
    /// Typical price: `(high + low + close) / 3`.
    HLC3,
    /// Average price: `(open + high + low + close) / 4`.
    OHLC4,
    /// Weighted close: `(high + low + close + close) / 4`.
    HLCC4,
    /// A derived column previously attached to the series, by name.
    Column(String),
}

impl Source {
    /// Source reading a named derived column.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    /// Column name the source resolves to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
            Self::HL2 => "hl2",
            Self::HLC3 => "hlc3",
            Self::OHLC4 => "ohlc4",
            Self::HLCC4 => "hlcc4",
            Self::Column(name) => name,
        }
    }

    /// Chart label suffix: empty for close, `_<name>` otherwise.
    pub(crate) fn label_suffix(&self) -> String {
        match self {
            Self::Close => String::new(),
            other => format!("_{}", other.name()),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
