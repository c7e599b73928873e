//! Unit-suffixed duration expressions.
//!
//! Parses strings such as `"30s"`, `"1m30s"`, `"1.5h"` or `"250ms"` into a
//! `std::time::Duration`. Terms are summed; each term is a decimal number
//! with an optional fraction followed by one of the units `ns`, `us`, `µs`,
//! `μs`, `ms`, `s`, `m`, `h`. A bare `0` is accepted without a unit.
//!
//! Negative results cannot be represented and are rejected, as is anything
//! beyond `i64::MAX` nanoseconds.

use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

// Longest units first so that "ms" is not read as "m" + "s".
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", NANOS_PER_MICRO),
    ("\u{b5}s", NANOS_PER_MICRO),
    ("\u{3bc}s", NANOS_PER_MICRO),
    ("ms", NANOS_PER_MILLI),
    ("s", NANOS_PER_SEC),
    ("m", NANOS_PER_MIN),
    ("h", NANOS_PER_HOUR),
];

/// Parse a unit-suffixed duration expression.
///
/// Returns `None` for malformed input, a missing unit, a negative non-zero
/// result, or overflow.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (nanos, remaining) = parse_term(rest)?;
        total = total.checked_add(nanos)?;
        rest = remaining;
    }

    if total > i64::MAX as u64 {
        return None;
    }
    if negative && total != 0 {
        return None;
    }
    Some(Duration::from_nanos(total))
}

/// Parse one `<number><unit>` term, returning its nanoseconds and the rest.
fn parse_term(input: &str) -> Option<(u64, &str)> {
    let int_len = input.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, rest) = input.split_at(int_len);

    let (frac_part, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            after_dot.split_at(frac_len)
        }
        None => ("", rest),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let unit_len = rest
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map_or(rest.len(), |(i, _)| i);
    let (unit, rest) = rest.split_at(unit_len);
    let scale = UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)?;

    let whole: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut nanos = whole.checked_mul(scale)?;

    if !frac_part.is_empty() {
        // Accumulate the fraction digit by digit to stay in integer math.
        let mut place = scale;
        for digit in frac_part.bytes().map(|b| u64::from(b - b'0')) {
            place /= 10;
            if place == 0 {
                break;
            }
            nanos = nanos.checked_add(digit * place)?;
        }
    }

    Some((nanos, rest))
}
