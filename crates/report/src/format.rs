//! Display formatting for dashboard figures.
//!
//! Amounts use a comma thousands separator and a dot decimal mark. Rounding is
//! half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// `S/14,057.00`: the symbol, then a grouped amount with two decimals.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    format!("{}{}", symbol, grouped(value, 2))
}

/// `263.1%`: one decimal, no grouping.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}

/// `1,700`: rounded to a whole number and grouped.
pub fn format_number(value: Decimal) -> String {
    grouped(value, 0)
}

/// `144.5:1`
pub fn format_ratio(value: Decimal) -> String {
    format!("{}:1", fixed(value, 1))
}

fn round(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Avoid printing "-0.0" for tiny negative values.
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, round(value, dp))
}

fn grouped(value: Decimal, dp: u32) -> String {
    let text = fixed(value, dp);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(14057), "S/"), "S/14,057.00");
        assert_eq!(format_currency(dec!(5.190311), "$"), "$5.19");
        assert_eq!(format_currency(dec!(140662.08), "S/"), "S/140,662.08");
        assert_eq!(format_currency(dec!(1234567.891), "€"), "€1,234,567.89");
        assert_eq!(format_currency(dec!(-2500.5), "$"), "$-2,500.50");
        assert_eq!(format_currency(dec!(999.995), "$"), "$1,000.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(263.12)), "263.1%");
        assert_eq!(format_percent(dec!(17)), "17.0%");
        assert_eq!(format_percent(dec!(51.15)), "51.2%");
        assert_eq!(format_percent(dec!(-0.04)), "0.0%");
        assert_eq!(format_percent(dec!(1234.56)), "1234.6%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec!(1700)), "1,700");
        assert_eq!(format_number(dec!(195364)), "195,364");
        assert_eq!(format_number(dec!(576.5)), "577");
        assert_eq!(format_number(dec!(-288)), "-288");
        assert_eq!(format_number(dec!(0)), "0");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(dec!(144.508670)), "144.5:1");
        assert_eq!(format_ratio(dec!(3)), "3.0:1");
    }
}
