//! Parsing of interval values such as `300ms`, `3m` or `1h30m`.

use std::time::Duration;

use crate::error::ValueError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(nanos)
}

/// Parses a sequence of `<decimal><unit>` terms into a [`Duration`].
///
/// A bare `0` is accepted. Negative intervals are rejected since
/// [`Duration`] cannot represent them.
pub fn parse(value: &str) -> Result<Duration, ValueError> {
    let invalid = |reason| ValueError::Duration {
        value: value.to_owned(),
        reason,
    };

    let mut rest = value;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid("empty interval"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_part, tail) = rest.split_at(int_len);

        let (frac_part, tail) = match tail.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
                tail.split_at(frac_len)
            }
            None => ("", tail),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid("expected a number"));
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(invalid("missing unit"));
        }
        let scale = unit_nanos(unit).ok_or_else(|| invalid("unknown unit"))?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid("value out of range"))?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or_else(|| invalid("value out of range"))?;

        if !frac_part.is_empty() {
            // Keep at most nanosecond precision so the digits fit in u128.
            let digits = &frac_part[..frac_part.len().min(18)];
            let numerator: u128 = digits.parse().map_err(|_| invalid("value out of range"))?;
            let denominator = 10u128.pow(digits.len() as u32);
            nanos = nanos
                .checked_add(numerator * scale / denominator)
                .ok_or_else(|| invalid("value out of range"))?;
        }

        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("value out of range"))?;
        rest = tail;
    }

    if negative && total != 0 {
        return Err(invalid("negative interval"));
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| invalid("value out of range"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_terms() {
        assert_eq!(parse("3m").unwrap(), Duration::from_secs(180));
        assert_eq!(parse("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse("15us").unwrap(), Duration::from_micros(15));
        assert_eq!(parse("15µs").unwrap(), Duration::from_micros(15));
        assert_eq!(parse("42ns").unwrap(), Duration::from_nanos(42));
        assert_eq!(parse("2h").unwrap(), Duration::from_secs(7200));
    }

    #[test]
    fn combined_terms_and_fractions() {
        assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse(".5m").unwrap(), Duration::from_secs(30));
        assert_eq!(parse("+10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse("1m0.25s").unwrap(), Duration::from_millis(60_250));
    }

    #[test]
    fn zero() {
        assert_eq!(parse("0").unwrap(), Duration::ZERO);
        assert_eq!(parse("-0").unwrap(), Duration::ZERO);
        assert_eq!(parse("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn rejects_malformed_values() {
        for value in [
            "",
            "10",
            "s",
            "3x",
            "1.s5",
            "-5s",
            "1h-3m",
            ".",
            "340282366920938463463374607431.9s",
        ] {
            assert!(parse(value).is_err(), "{value:?} should not parse");
        }
    }

    #[test]
    fn error_names_the_reason() {
        let err = parse("3x").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid duration "3x": unknown unit"#);
    }
}
