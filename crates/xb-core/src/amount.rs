//! Free-text amount extraction.

use std::sync::OnceLock;

use regex::Regex;

/// First run of digits (optionally containing internal spaces, dots or
/// commas as grouping/decimal separators), optionally followed by a
/// shorthand unit token.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?P<num>\d[\d\s.,]*)(?P<unit>\s*(?:k|ming|mln|million))?")
            .expect("valid regex")
    })
}

/// Extract the first monetary amount from free text.
///
/// `500k` / `500 ming` scale by 1 000, `1.5mln` / `million` by
/// 1 000 000; bare digits are taken literally. Grouping spaces are
/// stripped and a comma reads as a decimal point. The scaled value is
/// rounded to the nearest integer, half away from zero.
///
/// Returns `None` when the text has no digit run or the run does not
/// form a number. Only the first match counts; later numbers in the
/// same message are ignored. There is no negative-number syntax, so the
/// result is never below zero.
pub fn parse_amount(text: &str) -> Option<i64> {
    let caps = amount_re().captures(text)?;

    let raw = caps.name("num")?.as_str().replace(' ', "").replace(',', ".");
    let unit = caps
        .name("unit")
        .map(|m| m.as_str().trim().to_lowercase())
        .unwrap_or_default();

    let mut value: f64 = raw.parse().ok()?;
    if unit.contains("mln") || unit.contains("million") {
        value *= 1_000_000.0;
    } else if unit.ends_with('k') || unit.contains("ming") {
        value *= 1_000.0;
    }

    Some(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_shorthand_units() {
        assert_eq!(parse_amount("500k"), Some(500_000));
        assert_eq!(parse_amount("Korzinka 500K bozorlik"), Some(500_000));
        assert_eq!(parse_amount("25 ming taksi"), Some(25_000));
        assert_eq!(parse_amount("1.5mln"), Some(1_500_000));
        assert_eq!(parse_amount("2 MILLION"), Some(2_000_000));
    }

    #[test]
    fn strips_grouping_spaces() {
        assert_eq!(parse_amount("2 000"), Some(2_000));
        assert_eq!(parse_amount("1 200 000 benzin"), Some(1_200_000));
    }

    #[test]
    fn comma_reads_as_decimal_point() {
        assert_eq!(parse_amount("1,5k"), Some(1_500));
    }

    #[test]
    fn bare_digits_are_literal() {
        assert_eq!(parse_amount("7000"), Some(7_000));
        assert_eq!(parse_amount("aptek 12000"), Some(12_000));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // Exact binary halves, so the tie-break itself is what's pinned.
        assert_eq!(parse_amount("2.5"), Some(3));
        assert_eq!(parse_amount("0.5"), Some(1));
    }

    #[test]
    fn no_digits_means_absent() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("hello"), None);
        assert_eq!(parse_amount("so'm"), None);
        assert_eq!(parse_amount("korzinka bozorlik"), None);
    }

    #[test]
    fn malformed_digit_run_is_absent() {
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn first_number_wins() {
        assert_eq!(parse_amount("10k va 5k"), Some(10_000));
        assert_eq!(parse_amount("3 marta 500"), Some(3));
    }

    #[test]
    fn reparsing_the_canonical_decimal_is_stable() {
        let v = parse_amount("1.5k").unwrap();
        assert_eq!(parse_amount(&v.to_string()), Some(v));
    }
}
