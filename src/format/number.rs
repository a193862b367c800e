//! Currency and percentage rendering with en-US grouping

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Prices at or above this value use compact notation
pub const COMPACT_PRICE_THRESHOLD: Decimal = dec!(10000);

/// Fraction digits for prices below every row of the digit table
pub const FALLBACK_PRICE_DIGITS: u32 = 10;

/// Compact units, smallest first
const COMPACT_UNITS: [(u32, &str); 5] = [(0, ""), (3, "K"), (6, "M"), (9, "B"), (12, "T")];

/// Lower bound of a row in the price digit table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Matches when `price >= bound`
    AtLeast(Decimal),
    /// Matches when `price > bound`
    Above(Decimal),
}

impl Threshold {
    /// Check whether a price falls into this row
    pub fn matches(&self, price: Decimal) -> bool {
        match *self {
            Threshold::AtLeast(bound) => price >= bound,
            Threshold::Above(bound) => price > bound,
        }
    }
}

/// Price digit table, checked top to bottom.
///
/// The 100 and 1000 rows are strict while the 10000 row is inclusive, so
/// 1000 lands on one digit and 10000 on one digit with compact notation.
pub const PRICE_DIGIT_TABLE: [(Threshold, u32); 7] = [
    (Threshold::AtLeast(dec!(10000)), 1),
    (Threshold::Above(dec!(1000)), 0),
    (Threshold::Above(dec!(100)), 1),
    (Threshold::Above(dec!(0.1)), 2),
    (Threshold::Above(dec!(0.01)), 4),
    (Threshold::Above(dec!(0.0001)), 6),
    (Threshold::Above(dec!(0.000001)), 8),
];

/// Maximum fraction digits used to render a price of this magnitude
pub fn price_fraction_digits(price: Decimal) -> u32 {
    PRICE_DIGIT_TABLE
        .iter()
        .find(|(threshold, _)| threshold.matches(price))
        .map(|(_, digits)| *digits)
        .unwrap_or(FALLBACK_PRICE_DIGITS)
}

/// Formats monetary values in a single quote currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: String,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    compact: bool,
}

impl CurrencyFormatter {
    /// Create a formatter with explicit digit bounds
    pub fn new(
        currency: impl Into<String>,
        min_fraction_digits: u32,
        max_fraction_digits: u32,
        compact: bool,
    ) -> Self {
        Self {
            currency: currency.into(),
            min_fraction_digits: min_fraction_digits.min(max_fraction_digits),
            max_fraction_digits,
            compact,
        }
    }

    /// Formatter whose precision follows the magnitude of `price`.
    ///
    /// The same formatter renders every value on the payload that is
    /// denominated like the price (ATH, pullback).
    pub fn for_price(price: Decimal, currency: &str) -> Self {
        let min = if price < Decimal::ONE { 2 } else { 0 };
        Self::new(
            currency,
            min,
            price_fraction_digits(price),
            price >= COMPACT_PRICE_THRESHOLD,
        )
    }

    /// Compact formatter with at most one fraction digit
    pub fn market_cap(currency: &str) -> Self {
        Self::new(currency, 0, 1, true)
    }

    pub fn max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    pub fn min_fraction_digits(&self) -> u32 {
        self.min_fraction_digits
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Render a value, e.g. `$1,234.5`, `-$0.0012` or `$12.3K`
    pub fn format(&self, value: Decimal) -> String {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        let abs = value.abs();

        let (scaled, suffix) = if self.compact {
            compact_scale(abs, self.max_fraction_digits)
        } else {
            (round(abs, self.max_fraction_digits), "")
        };

        format!(
            "{}{}{}{}",
            sign,
            currency_prefix(&self.currency),
            render_fixed(scaled, self.min_fraction_digits, self.max_fraction_digits),
            suffix
        )
    }
}

/// Signed percentage with two fraction digits.
///
/// `points` is in percentage points: `1.5` renders as `+1.50%`.
pub fn format_percent(points: Decimal) -> String {
    let sign = if points.is_sign_negative() { "-" } else { "+" };
    format!("{}{}%", sign, render_fixed(points.abs(), 2, 2))
}

/// True when a change rounds to a whole 0 under half-up rounding
pub fn is_flat_change(points: Decimal) -> bool {
    points >= dec!(-0.5) && points < dec!(0.5)
}

fn round(value: Decimal, digits: u32) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

fn pow10(exp: u32) -> Decimal {
    Decimal::from(10_i64.pow(exp))
}

/// Scale a non-negative value into its compact unit.
///
/// Rounding can push a value to 1000 of its unit (999.96K); in that case the
/// next unit is used so the output reads `1M`.
fn compact_scale(abs: Decimal, digits: u32) -> (Decimal, &'static str) {
    let mut idx = COMPACT_UNITS
        .iter()
        .rposition(|(exp, _)| abs >= pow10(*exp))
        .unwrap_or(0);

    loop {
        let (exp, suffix) = COMPACT_UNITS[idx];
        let scaled = round(abs / pow10(exp), digits);
        if scaled >= dec!(1000) && idx + 1 < COMPACT_UNITS.len() {
            idx += 1;
            continue;
        }
        return (scaled, suffix);
    }
}

/// Render a non-negative value with trailing zeros trimmed to `min` digits
fn render_fixed(value: Decimal, min: u32, max: u32) -> String {
    let mut value = round(value, max).normalize();
    if value.scale() < min {
        value.rescale(min);
    }
    group_thousands(&value.to_string())
}

fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

fn currency_prefix(code: &str) -> String {
    let code = code.to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "CAD" => "CA$",
        "AUD" => "A$",
        "INR" => "₹",
        "KRW" => "₩",
        _ => return format!("{}\u{a0}", code),
    };
    symbol.to_string()
}
