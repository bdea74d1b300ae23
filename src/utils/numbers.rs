/// The longest prefix of `s` (after leading whitespace) that reads as a number.
fn numeric_prefix(s: &str, fraction: bool) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut seen_digits = int_end > end;
    end = int_end;

    if fraction {
        if bytes.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            if seen_digits || frac_end > end + 1 {
                seen_digits = true;
                end = frac_end;
            }
        }
        if seen_digits && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
    }

    if seen_digits { &s[..end] } else { "" }
}

/// Reads the leading integer of `s`, yielding 0 when there is none. Saturates on overflow.
pub fn leading_int(s: &str) -> i64 {
    let prefix = numeric_prefix(s, false);
    if prefix.is_empty() {
        return 0;
    }
    prefix.parse().unwrap_or_else(|_| {
        if prefix.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Reads the leading float of `s`, yielding 0 when there is none.
pub fn leading_float(s: &str) -> f64 {
    numeric_prefix(s, true).parse().unwrap_or(0.)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("12", 12)]
    #[case("  12abc", 12)]
    #[case("-7", -7)]
    #[case("+7x", 7)]
    #[case("3.9", 3)]
    #[case("abc", 0)]
    #[case("", 0)]
    #[case("-", 0)]
    #[case("99999999999999999999", i64::MAX)]
    #[case("-99999999999999999999", i64::MIN)]
    fn leading_ints(#[case] s: &str, #[case] expected: i64) {
        assert_eq!(leading_int(s), expected);
    }

    #[rstest]
    #[case("110", 110.)]
    #[case("-10", -10.)]
    #[case("2.5kg", 2.5)]
    #[case(".5", 0.5)]
    #[case("5.", 5.)]
    #[case("-3.5e1x", -35.)]
    #[case("1e", 1.)]
    #[case("1e+", 1.)]
    #[case(".", 0.)]
    #[case("x1", 0.)]
    #[case("", 0.)]
    fn leading_floats(#[case] s: &str, #[case] expected: f64) {
        assert_eq!(leading_float(s), expected);
    }
}
