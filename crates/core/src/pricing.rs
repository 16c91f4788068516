//! Pricing calculator.
//!
//! Works backwards from a revenue target to a suggested price, then brackets
//! it with a discount tier and a premium tier. All arithmetic is exact
//! decimal math; results are rounded half-to-even to cents.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Multiplier for the discount tier (80%).
const LOW_TIER: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
/// Multiplier for the premium tier (150%).
const HIGH_TIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Errors from parsing or evaluating a pricing request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A field was not a number.
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    /// An intermediate value does not fit the decimal range.
    #[error("values are too large to calculate a price")]
    Overflow,
}

/// Raw calculator fields as submitted by a user.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingInput<'a> {
    pub target_mrr: &'a str,
    /// Percentage, e.g. `"2"` for 2%.
    pub conversion_rate: &'a str,
    pub monthly_visitors: &'a str,
    pub cost_per_unit: &'a str,
}

/// Parsed calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRequest {
    pub target_mrr: Decimal,
    /// Percentage, e.g. `2` for 2%.
    pub conversion_rate: Decimal,
    pub monthly_visitors: Decimal,
    pub cost_per_unit: Decimal,
}

/// Suggested price tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingQuote {
    /// Expected paying customers per month, truncated to a whole number.
    pub buyers_per_month: i64,
    pub price_low: Decimal,
    pub price_mid: Decimal,
    pub price_high: Decimal,
}

impl PricingRequest {
    /// Parse every field. Blank fields count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidNumber`] for the first field that is
    /// neither blank nor a decimal number (plain or scientific notation).
    pub fn parse(input: &PricingInput<'_>) -> Result<Self, PricingError> {
        Ok(Self {
            target_mrr: parse_number("target_mrr", input.target_mrr)?,
            conversion_rate: parse_number("conversion_rate", input.conversion_rate)?,
            monthly_visitors: parse_number("monthly_visitors", input.monthly_visitors)?,
            cost_per_unit: parse_number("cost_per_unit", input.cost_per_unit)?,
        })
    }

    /// Compute the price tiers.
    ///
    /// With no expected buyers (zero traffic or zero conversion) the revenue
    /// target contributes nothing and every tier is derived from the unit
    /// cost alone.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if an intermediate result does not fit.
    pub fn quote(&self) -> Result<PricingQuote, PricingError> {
        let buyers = self
            .monthly_visitors
            .checked_mul(self.conversion_rate)
            .and_then(|v| v.checked_div(ONE_HUNDRED))
            .ok_or(PricingError::Overflow)?
            .max(Decimal::ZERO);

        let base_price = if buyers > Decimal::ZERO {
            self.target_mrr
                .checked_div(buyers)
                .ok_or(PricingError::Overflow)?
        } else {
            Decimal::ZERO
        };

        let required_price = base_price
            .checked_add(self.cost_per_unit)
            .ok_or(PricingError::Overflow)?
            .max(Decimal::ZERO);

        let price_low = required_price
            .checked_mul(LOW_TIER)
            .ok_or(PricingError::Overflow)?;
        let price_high = required_price
            .checked_mul(HIGH_TIER)
            .ok_or(PricingError::Overflow)?;

        Ok(PricingQuote {
            buyers_per_month: buyers.trunc().to_i64().ok_or(PricingError::Overflow)?,
            price_low: to_cents(price_low),
            price_mid: to_cents(required_price),
            price_high: to_cents(price_high),
        })
    }
}

/// Parse and evaluate in one step.
///
/// # Errors
///
/// See [`PricingRequest::parse`] and [`PricingRequest::quote`].
pub fn calculate(input: &PricingInput<'_>) -> Result<PricingQuote, PricingError> {
    PricingRequest::parse(input)?.quote()
}

fn parse_number(field: &'static str, raw: &str) -> Result<Decimal, PricingError> {
    let trimmed = raw.trim();
    // Whitespace-only input is treated as blank, so it counts as 0 rather
    // than an invalid number.
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PricingError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

fn to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}
