// web_app/format.rs - Display helpers shared by the storefront pages

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Stars drawn on a product card
pub const MAX_STARS: usize = 5;

/// Fraction digits kept by en-US number formatting
const YEN_FRACTION_DIGITS: u32 = 3;

/// Yen amount with en-US grouping and at most three fraction digits
///
/// Halves round away from zero and trailing zeros are dropped:
/// `¥45,670`, `¥299.99`, `¥12.5`, `¥0.125`.
pub fn format_yen(amount: Decimal) -> String {
    let text = amount
        .round_dp_with_strategy(YEN_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}¥{grouped}.{fraction}"),
        None => format!("{sign}¥{grouped}"),
    }
}

/// Filled stars for a rating: floor(rating), clamped to 0..=5
pub fn star_fill(rating: Decimal) -> usize {
    rating
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(MAX_STARS)
}

/// Whole percent off, when there is a real discount
pub fn discount_percent(price: Decimal, original: Decimal) -> Option<u32> {
    if original <= price || original.is_zero() {
        return None;
    }
    ((original - price) / original * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
}

/// Header cart badge: hidden when empty, "9+" past nine
pub fn cart_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Rating with one decimal, as printed beside the stars
pub fn format_rating(rating: Decimal) -> String {
    format!("{:.1}", rating.round_dp(1))
}
