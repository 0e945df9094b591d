//! Currency formatting for presentation layers

use bigdecimal::BigDecimal;

/// Format an amount as `#,##0.00`, rounding half-even to two places
pub fn format_amount(amount: &BigDecimal) -> String {
    let (minor_units, _) = amount.round(2).with_scale(2).as_bigint_and_exponent();
    let raw = minor_units.to_string();

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.as_str()),
    };
    let digits = format!("{digits:0>3}");
    let (whole, fraction) = digits.split_at(digits.len() - 2);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}
