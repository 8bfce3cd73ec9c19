//! Bidirectional conversion between Korean-unit currency notation and
//! integer meso amounts (e.g. "5억 8천만" <-> 580,000,000).

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 조 = 10^12.
pub const UNIT_JO: i64 = 1_000_000_000_000;
/// 억 = 10^8.
pub const UNIT_EOK: i64 = 100_000_000;
/// 천만 = 10^7.
pub const UNIT_CHEONMAN: i64 = 10_000_000;
/// 만 = 10^4.
pub const UNIT_MAN: i64 = 10_000;

lazy_static! {
    /// Coefficient of a 조 (10^12) token
    static ref RE_JO: Regex = Regex::new(r"(\d+\.?\d*)\s*조")
        .expect("Invalid regex pattern");

    /// Coefficient of an 억 (10^8) token
    static ref RE_EOK: Regex = Regex::new(r"(\d+\.?\d*)\s*억")
        .expect("Invalid regex pattern");

    /// Coefficient of a 천만 (10^7) token
    static ref RE_CHEONMAN: Regex = Regex::new(r"(\d+\.?\d*)\s*천만")
        .expect("Invalid regex pattern");

    /// 천 directly after 억; a trailing 만 is checked at the match site
    /// since the regex crate has no lookahead
    static ref RE_EOK_CHEON: Regex = Regex::new(r"억[^\d]*(\d+\.?\d*)\s*천")
        .expect("Invalid regex pattern");

    /// Coefficient of a 만 (10^4) token
    static ref RE_MAN: Regex = Regex::new(r"(\d+\.?\d*)\s*만")
        .expect("Invalid regex pattern");

    /// Bare integer remainder after a 만 token
    static ref RE_MAN_REMAINDER: Regex = Regex::new(r"만\s*(\d+)")
        .expect("Invalid regex pattern");
}

/// Parses a display string in Korean currency notation into an integer
/// meso amount.
///
/// Empty or unparseable input yields 0, never an error; callers that
/// require a positive amount must reject non-positive results themselves.
/// Plain numbers below 10,000 are read as 억-denominated shorthand
/// ("5.8" means 5억 8천만 = 580,000,000); numbers at or above 10,000 are
/// taken literally. The result is always floored to a whole meso.
pub fn parse_amount(input: &str) -> i64 {
    let cleaned = input.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0;
    }

    if ['조', '억', '천', '만'].iter().any(|u| cleaned.contains(*u)) {
        return parse_with_units(&cleaned);
    }

    let num = match Decimal::from_str(&cleaned) {
        Ok(n) => n,
        Err(_) => return 0,
    };

    if num >= Decimal::from(UNIT_MAN) {
        return num.floor().to_i64().unwrap_or(0);
    }

    // Billion shorthand: integer part is 억, first decimal digit is 천만.
    let billions = num.floor();
    let ten_millions = ((num - billions) * Decimal::TEN)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (billions * Decimal::from(UNIT_EOK) + ten_millions * Decimal::from(UNIT_CHEONMAN))
        .to_i64()
        .unwrap_or(0)
}

/// Sums the independent unit coefficients of a string that contains at
/// least one of 조/억/천만/천/만.
fn parse_with_units(input: &str) -> i64 {
    let mut total = Decimal::ZERO;

    if let Some(caps) = RE_JO.captures(input) {
        total += coefficient(&caps[1]) * Decimal::from(UNIT_JO);
    }

    if let Some(caps) = RE_EOK.captures(input) {
        total += coefficient(&caps[1]) * Decimal::from(UNIT_EOK);
    }

    if let Some(caps) = RE_CHEONMAN.captures(input) {
        total += coefficient(&caps[1]) * Decimal::from(UNIT_CHEONMAN);
    } else {
        // A bare 천 right after 억 means 천만: "5억 8천" reads as 5.8억.
        if let Some(coef) = eok_cheon_coefficient(input) {
            total += coef * Decimal::from(UNIT_CHEONMAN);
        }
        if !input.contains("천만") {
            if let Some(coef) = man_coefficient(input) {
                total += coef * Decimal::from(UNIT_MAN);
            }
        }
    }

    if let Some(rest) = bare_remainder(input) {
        total += Decimal::from(rest);
    }

    total.floor().to_i64().unwrap_or(0)
}

/// First 천-after-억 coefficient whose 천 is not part of 천만.
fn eok_cheon_coefficient(input: &str) -> Option<Decimal> {
    for caps in RE_EOK_CHEON.captures_iter(input) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        if input[end..].chars().next() != Some('만') {
            return Some(coefficient(&caps[1]));
        }
    }
    None
}

/// First 만 coefficient not followed (through spaces/digits) by 천.
fn man_coefficient(input: &str) -> Option<Decimal> {
    for caps in RE_MAN.captures_iter(input) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let next = input[end..]
            .chars()
            .find(|c| !c.is_whitespace() && !c.is_ascii_digit());
        if next != Some('천') {
            return Some(coefficient(&caps[1]));
        }
    }
    None
}

/// Trailing bare integer after a 만 token, when no further unit follows.
fn bare_remainder(input: &str) -> Option<i64> {
    for caps in RE_MAN_REMAINDER.captures_iter(input) {
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        let next = input[end..]
            .chars()
            .find(|c| !c.is_whitespace() && !c.is_ascii_digit());
        if !matches!(next, Some('억') | Some('천') | Some('만')) {
            return caps[1].parse::<i64>().ok();
        }
    }
    None
}

fn coefficient(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim_end_matches('.')).unwrap_or(Decimal::ZERO)
}

/// Formats an integer meso amount into the compact display form.
///
/// Values of 1억 and above show the 억 quotient with one decimal place
/// (no decimal point when the quotient is whole); values between 1만 and
/// 1억 show the floored 만 quotient; smaller values are comma-grouped.
/// The compact form drops any sub-만 remainder, so `parse(format(x))`
/// is lossy for such values.
pub fn format_amount(value: i64) -> String {
    if value >= UNIT_EOK {
        if value % UNIT_EOK == 0 {
            return format!("{}억", value / UNIT_EOK);
        }
        let quotient = (Decimal::from(value) / Decimal::from(UNIT_EOK))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        return format!("{}억", quotient);
    }
    if value >= UNIT_MAN {
        return format!("{}만", value / UNIT_MAN);
    }
    group_thousands(value)
}

/// Comma-grouped integer string ("1234567" -> "1,234,567").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
