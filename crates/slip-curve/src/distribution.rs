//! Supply-driven rate distribution over item types.
//!
//! Each item type starts at its configured rate. Every draw removes one unit
//! of supply and re-rates the item as `max_rate * rate_modifier(supply, slip)`,
//! so scarce items become harder to draw as their supply runs out. A default
//! catch-all item type (rate 0, unlimited supply, no slip) absorbs whatever
//! probability mass the configured types leave free.
//!
//! Selection walks the item types in ascending `max_rate` order, carving
//! consecutive buckets of width `ceil(max_range * rate)` downward from
//! `max_range`. A random number that lands in no bucket selects the default
//! item type.

use serde::{Deserialize, Serialize};
use slip_core::error::{CurveError, DistributionError};
use slip_core::traits::RateCalculator;
use tracing::debug;

use crate::curve::RateCurve;

/// Name of the catch-all item type when none is given.
pub const DEFAULT_ITEM_NAME: &str = "common";

/// Slack allowed when checking that configured rates sum to at most 1.
const TOTAL_RATE_TOLERANCE: f64 = 1e-12;

/// Initial configuration of one item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTypeInit {
    pub name: String,
    /// Starting draw probability, strictly between 0 and 1.
    pub rate: f64,
    pub slip_rate: u64,
    pub supply: u64,
}

impl ItemTypeInit {
    pub fn new(name: impl Into<String>, rate: f64, slip_rate: u64, supply: u64) -> Self {
        Self {
            name: name.into(),
            rate,
            slip_rate,
            supply,
        }
    }
}

/// An item type with its live rate and remaining supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub name: String,
    /// Current draw probability.
    pub rate: f64,
    max_rate: f64,
    pub slip_rate: u64,
    /// Remaining supply.
    pub supply: u64,
    max_supply: u64,
}

impl ItemType {
    fn from_init(init: &ItemTypeInit) -> Self {
        Self {
            name: init.name.clone(),
            rate: init.rate,
            max_rate: init.rate,
            slip_rate: init.slip_rate,
            supply: init.supply,
            max_supply: init.supply,
        }
    }

    fn catch_all(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            rate: 0.0,
            max_rate: 1.0,
            slip_rate: 0,
            supply: u64::MAX,
            max_supply: u64::MAX,
        }
    }

    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }

    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }
}

/// Item types sorted by `max_rate`, re-rated through a [`RateCalculator`].
#[derive(Debug, Clone)]
pub struct RateDistribution<C: RateCalculator = RateCurve> {
    items: Vec<ItemType>,
    curve: C,
}

impl RateDistribution<RateCurve> {
    /// Distribution over the default curve.
    pub fn new(
        init: &[ItemTypeInit],
        default_name: Option<String>,
    ) -> Result<Self, DistributionError> {
        Self::with_curve(init, default_name, RateCurve::default())
    }
}

impl<C: RateCalculator> RateDistribution<C> {
    /// Validate the configured item types and append the catch-all type.
    ///
    /// Every rate must lie strictly inside `(0, 1)` and the rates must sum to
    /// at most 1.
    pub fn with_curve(
        init: &[ItemTypeInit],
        default_name: Option<String>,
        curve: C,
    ) -> Result<Self, DistributionError> {
        let mut items = Vec::with_capacity(init.len() + 1);
        let mut total_rate = 0.0;

        for item in init {
            if !(item.rate > 0.0 && item.rate < 1.0) {
                return Err(DistributionError::InvalidRate {
                    name: item.name.clone(),
                    rate: item.rate,
                });
            }
            items.push(ItemType::from_init(item));
            total_rate += item.rate;
        }

        if total_rate > 1.0 + TOTAL_RATE_TOLERANCE {
            return Err(DistributionError::TotalRateExceeded(total_rate));
        }

        items.push(ItemType::catch_all(default_name));
        // Stable: equal max rates keep configuration order.
        items.sort_by(|a, b| a.max_rate.total_cmp(&b.max_rate));

        Ok(Self { items, curve })
    }

    pub fn items(&self) -> &[ItemType] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true: the catch-all item type is always present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemType> {
        self.items.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), DistributionError> {
        if index >= self.items.len() {
            return Err(DistributionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    /// Index of the item type whose bucket contains `random_number`.
    ///
    /// Buckets are `[lower, upper)` with `upper` starting at `max_range` and
    /// each bucket `ceil(max_range * rate)` wide. Anything below the last
    /// bucket selects the catch-all item type.
    pub fn select(&self, random_number: u128, max_range: u128) -> Result<usize, DistributionError> {
        if max_range == 0 {
            return Err(DistributionError::EmptySelectionRange);
        }

        let last = self.items.len() - 1;
        let mut upper = max_range;
        for (index, item) in self.items[..last].iter().enumerate() {
            let width = (max_range as f64 * item.rate).ceil() as u128;
            let lower = upper.saturating_sub(width);
            if random_number < upper && random_number >= lower {
                return Ok(index);
            }
            upper = lower;
        }
        Ok(last)
    }

    /// Remove one unit of supply from an item type and re-rate it.
    ///
    /// At a supply of 1 or less the item is exhausted: rate and supply both
    /// drop to 0.
    pub fn consume(&mut self, index: usize) -> Result<(), DistributionError> {
        self.check_index(index)?;
        let item = &mut self.items[index];

        if item.supply <= 1 {
            item.rate = 0.0;
            item.supply = 0;
        } else {
            let remaining = item.supply - 1;
            item.rate = item.max_rate * self.curve.rate_modifier(remaining, item.slip_rate);
            item.supply = remaining;
        }

        debug!(
            item = %item.name,
            supply = item.supply,
            rate = item.rate,
            "item type consumed"
        );
        Ok(())
    }

    /// Select an item type for `random_number` and consume one unit of it.
    pub fn draw(&mut self, random_number: u128, max_range: u128) -> Result<usize, DistributionError> {
        let index = self.select(random_number, max_range)?;
        self.consume(index)?;
        Ok(index)
    }

    /// Purity `(h - c) / (h - l)` of an item type.
    ///
    /// `h` is the modifier at the item's full supply, `l` at a supply of 1,
    /// and `c` at its current supply. A fresh item has purity 0 and an item
    /// down to its last unit has purity 1.
    pub fn purity(&self, index: usize) -> Result<f64, DistributionError> {
        self.check_index(index)?;
        let item = &self.items[index];

        let high = self.curve.rate_modifier(item.max_supply, item.slip_rate);
        let low = self.curve.rate_modifier(1, item.slip_rate);
        let current = self.curve.rate_modifier(item.supply, item.slip_rate);

        let span = high - low;
        if span == 0.0 {
            return Err(CurveError::DegenerateScale { high, low }.into());
        }
        Ok((high - current) / span)
    }
}
