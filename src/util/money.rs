//! Integer-cent money formatting and input parsing.
//!
//! Amounts travel as integer cents end to end; floats only ever appear at
//! the rendering edge. Parsing accepts what a person types into an amount
//! field (`"1,234.56"`, `"$40"`) and rejects anything lossy.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Render integer cents as a dollar string, e.g. `123456` → `"$1,234.56"`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remainder = magnitude % 100;
    format!("{sign}${}.{remainder:02}", group_thousands(dollars))
}

/// Parse a user-typed amount into integer cents.
///
/// Accepts an optional leading `$`, comma group separators, and at most two
/// decimal places. Returns `None` for anything empty, negative, malformed,
/// or out of range.
#[must_use]
pub fn parse_amount(input: &str) -> Option<i64> {
    let cleaned = input.trim().strip_prefix('$').unwrap_or(input.trim());
    let cleaned = cleaned.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let mut cents: i64 = if frac.is_empty() { 0 } else { frac.parse().ok()? };
    if frac.len() == 1 {
        cents *= 10;
    }
    dollars.checked_mul(100)?.checked_add(cents)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
