// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation helpers. This is the only place amounts are rounded.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Formats an amount in dollars, rounded half away from zero to cents,
/// with thousands separators: `1234.5` becomes `$1,234.50`.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // rounded cents of any realistic price fit in i64
pub fn format_money(amount: f64) -> String {
    let cents: i64 = (amount * 100.0).round() as i64;
    let sign: &str = if cents < 0 { "-" } else { "" };
    let cents: u64 = cents.unsigned_abs();

    let whole: String = (cents / 100).to_string();
    let mut grouped: String = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Formats a date as `March 1, 2024`.
///
/// # Errors
///
/// Returns `DomainError::DateFormatError` if the date cannot be rendered.
pub fn format_long_date(date: Date) -> Result<String, DomainError> {
    date.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .map_err(|e| DomainError::DateFormatError {
        error: e.to_string(),
    })
}

/// Describes the length of a stay: `For 1 night`, `For 3 nights`.
#[must_use]
pub fn nights_summary(nights: u32) -> String {
    if nights == 1 {
        String::from("For 1 night")
    } else {
        format!("For {nights} nights")
    }
}
