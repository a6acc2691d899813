//! Derived stock metrics — pure functions of [`DashboardStats`].
//!
//! Two independent threshold scales are applied to the availability
//! percentage: a three-level label (40 / 70) and a binary pulse (50). They
//! disagree between 40 and 70 and stay separate.

use std::fmt;

use crate::stats::DashboardStats;

/// Below this availability the label is [`AvailabilityLabel::NeedsAttention`].
pub const ATTENTION_BELOW: u64 = 40;
/// From this availability upwards the label is [`AvailabilityLabel::Excellent`].
pub const EXCELLENT_FROM: u64 = 70;
/// From this availability upwards the pulse is [`StockPulse::WellStocked`].
pub const WELL_STOCKED_FROM: u64 = 50;

/// `round(part / whole * 100)` with half-up rounding, in exact integer
/// arithmetic. `whole` must be non-zero.
fn rounded_percent(part: u64, whole: u64) -> u64 {
    let part = u128::from(part);
    let whole = u128::from(whole);
    let rounded = (200 * part + whole) / (2 * whole);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Percentage of books not currently borrowed; `0` when the library is empty.
#[must_use]
pub fn availability_percentage(stats: &DashboardStats) -> u64 {
    if stats.total_books == 0 {
        return 0;
    }
    rounded_percent(stats.available_books, stats.total_books)
}

/// Transactions per book, as a percentage.
#[must_use]
pub fn usage_rate(stats: &DashboardStats) -> u64 {
    rounded_percent(stats.total_transactions, stats.total_books.max(1))
}

/// Three-level qualitative availability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityLabel {
    NeedsAttention,
    Good,
    Excellent,
}

impl AvailabilityLabel {
    #[must_use]
    pub fn from_percentage(percentage: u64) -> Self {
        if percentage < ATTENTION_BELOW {
            Self::NeedsAttention
        } else if percentage < EXCELLENT_FROM {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeedsAttention => "Needs Attention",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for AvailabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary stock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPulse {
    WellStocked,
    GettingBusy,
}

impl StockPulse {
    #[must_use]
    pub fn from_percentage(percentage: u64) -> Self {
        if percentage >= WELL_STOCKED_FROM {
            Self::WellStocked
        } else {
            Self::GettingBusy
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WellStocked => "well-stocked",
            Self::GettingBusy => "getting busy",
        }
    }
}

impl fmt::Display for StockPulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the dashboard derives from one [`DashboardStats`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockMetrics {
    pub availability_percentage: u64,
    pub usage_rate: u64,
    pub borrowed_books: u64,
    pub availability_label: AvailabilityLabel,
    pub stock_pulse: StockPulse,
}

impl From<&DashboardStats> for StockMetrics {
    fn from(stats: &DashboardStats) -> Self {
        let availability = availability_percentage(stats);
        Self {
            availability_percentage: availability,
            usage_rate: usage_rate(stats),
            borrowed_books: stats.borrowed_books(),
            availability_label: AvailabilityLabel::from_percentage(availability),
            stock_pulse: StockPulse::from_percentage(availability),
        }
    }
}
