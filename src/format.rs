// src/format.rs
// Currency, number and text helpers shared by the catalog, cart and render code
use crate::domain::models::{MAX_QTY, MIN_QTY};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round to cents, halves away from zero
pub fn round2(n: Decimal) -> Decimal {
    n.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp `n` into `[min, max]`
pub fn clamp<T: PartialOrd>(n: T, min: T, max: T) -> T {
    let n = if n < min { min } else { n };
    if n > max {
        max
    } else {
        n
    }
}

/// Clamp an arbitrary integer into the allowed line quantity range
pub fn clamp_qty(n: i64) -> u32 {
    clamp(n, i64::from(MIN_QTY), i64::from(MAX_QTY)) as u32
}

/// Format an amount as US dollars, e.g. `$1,234.50` or `-$5.00`
pub fn format_currency(n: Decimal) -> String {
    let rounded = round2(n);

    // Near the top of the decimal range the scale can't grow to 2, so split
    // the mantissa at whatever scale the value actually carries
    let scale = rounded.scale() as usize;
    let mantissa = rounded.mantissa().unsigned_abs();
    let padded = format!("{:0>width$}", mantissa, width = scale + 1);
    let (digits, frac) = padded.split_at(padded.len() - scale);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 prints as $0.00
    let sign = if rounded.is_sign_negative() && mantissa > 0 { "-" } else { "" };
    format!("{}${}.{:0<2}", sign, grouped, frac)
}

/// Lenient price parse: keep digits, dots and minus signs, then read the
/// longest numeric prefix. Anything unparseable is zero.
pub fn parse_currency(s: &str) -> Decimal {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match leading_decimal(&cleaned) {
        Some(value) if !value.is_zero() => value,
        _ => Decimal::ZERO,
    }
}

fn leading_decimal(s: &str) -> Option<Decimal> {
    let bytes = s.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let mut pos = usize::from(negative);

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &s[frac_start..end];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };

    let value = Decimal::from_str(&literal).ok()?;
    Some(if negative { -value } else { value })
}

/// Read the leading integer of `s` the way a lenient `parseInt` does:
/// `"12abc"` is 12, `"3.9"` is 3, `"abc"` is nothing.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long input; the caller clamps anyway
    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    Some(if negative { -magnitude } else { magnitude })
}

/// Quantity input rule: invalid or zero input becomes 1, then clamp to the line range
pub fn parse_quantity(s: &str) -> u32 {
    let n = parse_int_prefix(s).filter(|n| *n != 0).unwrap_or(1);
    clamp_qty(n)
}

/// Lowercase, collapse every non-alphanumeric run into `-`, trim separators
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_sep = false;

    for ch in s.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Escape text for interpolation into markup
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(dec!(2.075)), dec!(2.08));
        assert_eq!(round2(dec!(1.8675)), dec!(1.87));
        assert_eq!(round2(dec!(-2.075)), dec!(-2.08));
        assert_eq!(round2(dec!(2.074)), dec!(2.07));
    }

    #[test]
    fn formats_us_dollars() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(5)), "$5.00");
        assert_eq!(format_currency(dec!(27.075)), "$27.08");
        assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(-5)), "-$5.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn formats_amounts_at_the_top_of_the_range() {
        assert_eq!(
            format_currency(parse_currency("$12345678901234567890123456789")),
            "$12,345,678,901,234,567,890,123,456,789.00"
        );
        assert_eq!(
            format_currency(dec!(1234567890123456789012345678)),
            "$1,234,567,890,123,456,789,012,345,678.00"
        );
        assert_eq!(
            format_currency(dec!(123456789012345678901234567.8)),
            "$123,456,789,012,345,678,901,234,567.80"
        );
        assert_eq!(
            format_currency(Decimal::MIN),
            "-$79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn parses_price_text_leniently() {
        assert_eq!(parse_currency("$1,299.99"), dec!(1299.99));
        assert_eq!(parse_currency("USD 49"), dec!(49));
        assert_eq!(parse_currency("-$3.50"), dec!(-3.50));
        assert_eq!(parse_currency(".5"), dec!(0.5));
        assert_eq!(parse_currency("1.2.3"), dec!(1.2));
        assert_eq!(parse_currency("12-3"), dec!(12));
        assert_eq!(parse_currency("free"), Decimal::ZERO);
        assert_eq!(parse_currency("--5"), Decimal::ZERO);
        assert_eq!(parse_currency(""), Decimal::ZERO);
    }

    #[test]
    fn parses_integer_prefix() {
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("  7 "), Some(7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("+4"), Some(4));
        assert_eq!(parse_int_prefix("-2"), Some(-2));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn quantity_input_coerces_and_clamps() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-5"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("5000"), 999);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Wireless Headphones "), "wireless-headphones");
        assert_eq!(slugify("Café & Co. -- Mug!"), "caf-co-mug");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("USB-C 2.0"), "usb-c-2-0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(0, 1, 999), 1);
        assert_eq!(clamp(1000, 1, 999), 999);
        assert_eq!(clamp_qty(-3), 1);
        assert_eq!(clamp_qty(42), 42);
    }
}
