// Chat transcript domain models
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Exact amount of money in cents.
///
/// Serialised as a decimal number of dollars so chart and text collaborators
/// never see the integer representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_dollars(&self) -> f64 {
        self.cents() as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents + rhs.cents)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub price: Money,
}

impl LineItem {
    pub fn new(name: &str, cents: i64) -> Self {
        Self {
            name: name.to_string(),
            price: Money::from_cents(cents),
        }
    }
}

/// Purchases made under one banner on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseGroup {
    pub source: String,
    pub date: NaiveDate,
    pub line_items: Vec<LineItem>,
}

impl PurchaseGroup {
    pub fn new(source: &str, date: NaiveDate, line_items: Vec<LineItem>) -> Self {
        Self {
            source: source.to_string(),
            date,
            line_items,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.line_items.iter().map(|item| item.price).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatExchange {
    pub user_text: String,
    pub groups: Vec<PurchaseGroup>,
    pub total: Money,
}

impl ChatExchange {
    /// The total is always derived from the groups.
    pub fn new(user_text: &str, groups: Vec<PurchaseGroup>) -> Self {
        let total = groups.iter().map(PurchaseGroup::subtotal).sum();
        Self {
            user_text: user_text.to_string(),
            groups,
            total,
        }
    }

    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.groups.iter().flat_map(|g| g.line_items.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyBar {
    pub item_name: String,
    pub count: u32,
}

impl FrequencyBar {
    pub fn new(item_name: &str, count: u32) -> Self {
        Self {
            item_name: item_name.to_string(),
            count,
        }
    }
}
