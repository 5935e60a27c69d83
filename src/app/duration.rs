use std::time::{Duration, Instant};

use crate::context::Context;

/// How long the whole run may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Zero: no deadline at all.
    Never,
    After(Duration),
    /// Negative: the deadline has already passed.
    Expired,
}

impl Timeout {
    /// A fresh context carrying this timeout.
    pub fn context(self) -> Context {
        match self {
            Timeout::Never => Context::new(),
            Timeout::After(timeout) => Context::with_timeout(timeout),
            Timeout::Expired => Context::with_deadline(Instant::now()),
        }
    }
}

/// Parse a timeout such as `300ms`, `1.5s`, `1h30m` or `-1s`.
///
/// A timeout is an optional sign followed by a sequence of decimal numbers,
/// each with an optional fraction and a mandatory unit: `ns`, `us` (or
/// `µs`), `ms`, `s`, `m`, `h`. A bare `0` is accepted.
pub fn parse_timeout(s: &str) -> Result<Timeout, String> {
    let invalid = || format!("invalid duration '{}'", s);

    let t = s.trim();
    let (negative, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    if t == "0" {
        return Ok(Timeout::Never);
    }
    if t.is_empty() {
        return Err(invalid());
    }

    let mut rest = t;
    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (int_part, after) = split_digits(rest);
        let (frac_part, after) = match after.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_end = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_end);
        let scale: u128 = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3_600 * 1_000_000_000,
            "" => return Err(format!("missing unit in duration '{}'", s)),
            _ => return Err(format!("unknown unit '{}' in duration '{}'", unit, s)),
        };

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| invalid())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(invalid)?;

        // Digits past the 18th cannot matter at nanosecond resolution.
        let frac_part = &frac_part[..frac_part.len().min(18)];
        if !frac_part.is_empty() {
            let frac: u128 = frac_part.parse().map_err(|_| invalid())?;
            nanos += frac * scale / 10u128.pow(frac_part.len() as u32);
        }

        total = total.checked_add(nanos).ok_or_else(invalid)?;
        rest = after;
    }

    let nanos = u64::try_from(total).map_err(|_| invalid())?;
    Ok(match (nanos, negative) {
        (0, _) => Timeout::Never,
        (_, true) => Timeout::Expired,
        (_, false) => Timeout::After(Duration::from_nanos(nanos)),
    })
}

/// Split off the leading run of ASCII digits.
#[inline]
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}
