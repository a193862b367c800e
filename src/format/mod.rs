//! Formatting module
//!
//! Number, currency and relative-time rendering for notification payloads.
//! Output follows en-US conventions: `,` grouping, `.` decimal separator.

mod number;
mod relative;

pub use number::{
    format_percent, is_flat_change, price_fraction_digits, CurrencyFormatter, Threshold,
    COMPACT_PRICE_THRESHOLD, FALLBACK_PRICE_DIGITS, PRICE_DIGIT_TABLE,
};
pub use relative::format_distance;
