//! Receipt scoring engine
//!
//! Maps a receipt to an integer point total. The total is the sum of seven
//! independent rules:
//!
//! | Rule              | Points                                                        |
//! |-------------------|---------------------------------------------------------------|
//! | retailer          | 1 per alphanumeric character in the retailer name             |
//! | round dollar      | 50 if the cents part of the total is exactly `00`            |
//! | quarter multiple  | 25 if the cents part is a multiple of 25 (0 included)         |
//! | item descriptions | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | odd day           | 6 if the day of the purchase date is odd                      |
//! | afternoon         | 10 if hour in `14..16` and minute in `1..=59`                 |
//! | item count        | 5 per pair of items                                           |
//!
//! Round dollar and quarter multiple overlap on purpose: a `.00` total earns both.
//!
//! # Error Handling
//!
//! Scoring never fails. A rule that cannot parse its input logs a warning and
//! contributes 0; the remaining rules are still evaluated. Scoring has no side
//! effects, so repeated scoring of the same receipt yields the same total.

use crate::types::{Item, Points, Receipt, ReceiptError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;
const POINTS_PER_ITEM_PAIR: Points = 5;

/// Per-rule points for a single receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub retailer: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
    pub item_count: Points,
}

impl ScoreBreakdown {
    /// Sum of all sub-scores, saturating at `Points::MAX`
    pub fn total(&self) -> Points {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
            self.item_count,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Score a receipt
pub fn score(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Score a receipt rule by rule
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: or_zero("round_dollar", round_dollar_points(&receipt.total)),
        quarter_multiple: or_zero(
            "quarter_multiple",
            quarter_multiple_points(&receipt.total),
        ),
        item_descriptions: description_points(&receipt.items),
        odd_day: or_zero("odd_day", odd_day_points(&receipt.purchase_date)),
        afternoon: or_zero("afternoon", afternoon_points(&receipt.purchase_time)),
        item_count: item_count_points(receipt.items.len()),
    }
}

fn or_zero(rule: &'static str, result: Result<Points, ReceiptError>) -> Points {
    result.unwrap_or_else(|error| {
        warn!(rule, %error, "scoring rule could not be applied, scoring 0");
        0
    })
}

/// One point for every letter or digit in the retailer name
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

/// Text after the first `.` of the total
fn cents(total: &str) -> Result<&str, ReceiptError> {
    total
        .split('.')
        .nth(1)
        .ok_or_else(|| ReceiptError::missing_cents(total))
}

/// 50 points if the total is a round dollar amount
pub fn round_dollar_points(total: &str) -> Result<Points, ReceiptError> {
    let cents = cents(total)?;
    Ok(if cents == "00" { ROUND_DOLLAR_POINTS } else { 0 })
}

/// 25 points if the cents part of the total is a multiple of 25
pub fn quarter_multiple_points(total: &str) -> Result<Points, ReceiptError> {
    let cents = cents(total)?;
    let value: u64 = cents
        .parse()
        .map_err(|_| ReceiptError::invalid_cents(total, cents))?;
    Ok(if value % 25 == 0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    })
}

/// Points for a single item
///
/// If the trimmed description length (in characters) is a multiple of 3, the
/// item earns the price multiplied by 0.2, rounded up. The price is only
/// parsed when the length qualifies.
pub fn item_description_points(item: &Item) -> Result<Points, ReceiptError> {
    let description = item.short_description.trim();
    if description.chars().count() % 3 != 0 {
        return Ok(0);
    }

    let invalid = || ReceiptError::invalid_price(description, &item.price);
    let price = Decimal::from_str(item.price.trim()).map_err(|_| invalid())?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid());
    }

    (price * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .ok_or_else(invalid)
}

/// Sum of item points across all items
///
/// An item whose price cannot be parsed contributes 0; the other items are
/// still scored. If the sum overflows, the whole rule scores 0.
pub fn description_points(items: &[Item]) -> Points {
    items
        .iter()
        .map(|item| or_zero("item_description", item_description_points(item)))
        .try_fold(0, Points::checked_add)
        .unwrap_or_else(|| {
            warn!(
                rule = "item_descriptions",
                item_count = items.len(),
                "item points overflow, scoring 0"
            );
            0
        })
}

/// 6 points if the day in the purchase date is odd
pub fn odd_day_points(purchase_date: &str) -> Result<Points, ReceiptError> {
    let day: u32 = purchase_date
        .split('-')
        .nth(2)
        .and_then(|day| day.parse().ok())
        .ok_or_else(|| ReceiptError::invalid_date(purchase_date))?;
    Ok(if day % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// 10 points if the purchase time falls in the afternoon window
///
/// The window is `hour >= 14 && minute >= 1 && hour < 16 && minute <= 59`,
/// so on-the-hour times (`14:00`, `15:00`) do not qualify.
pub fn afternoon_points(purchase_time: &str) -> Result<Points, ReceiptError> {
    let invalid = || ReceiptError::invalid_time(purchase_time);
    let mut parts = purchase_time.split(':');
    let hour: u32 = parts
        .next()
        .and_then(|h| h.parse().ok())
        .ok_or_else(invalid)?;
    let minute: u32 = parts
        .next()
        .and_then(|m| m.parse().ok())
        .ok_or_else(invalid)?;

    let in_window = (14..16).contains(&hour) && (1..=59).contains(&minute);
    Ok(if in_window { AFTERNOON_POINTS } else { 0 })
}

/// 5 points for every two items
pub fn item_count_points(item_count: usize) -> Points {
    (item_count / 2) as Points * POINTS_PER_ITEM_PAIR
}
