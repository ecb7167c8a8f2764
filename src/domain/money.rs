use thiserror::Error;

/// Money is held as integer cents so repeated additions stay exact.
/// On disk amounts are plain JSON numbers in whole units: 5200 cents <-> `52.0`.
pub type Cents = i64;

/// Largest magnitude any ledger total may reach: 10 trillion units.
/// Keeps every sum far from `i64` overflow and exactly representable as an
/// `f64` unit amount on disk.
pub const MAX_CENTS: Cents = 1_000_000_000_000_000;

/// Format cents as a human-readable amount.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Parse a user-entered decimal amount into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000
///
/// More than two decimal places are truncated. The sign is kept; rejecting
/// non-positive amounts is up to the caller.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseCentsError::Empty);
    }
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units, decimals) = match digits.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };
    if units.is_empty() && decimals.is_empty() {
        return Err(ParseCentsError::InvalidFormat(input.to_string()));
    }
    if !units.chars().chain(decimals.chars()).all(|c| c.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat(input.to_string()));
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units
            .parse()
            .map_err(|_| ParseCentsError::Overflow(input.to_string()))?
    };
    let decimal_cents: i64 = match decimals.len() {
        0 => 0,
        // "12.5" means fifty cents
        1 => decimals.parse::<i64>().unwrap_or(0) * 10,
        _ => decimals[..2].parse().unwrap_or(0),
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or_else(|| ParseCentsError::Overflow(input.to_string()))?;
    Ok(if negative { -cents } else { cents })
}

/// Convert a persisted unit amount (e.g. `12.5`) into cents, rounding to the
/// nearest cent. Returns `None` for values that cannot be represented.
pub fn units_to_cents(units: f64) -> Option<Cents> {
    if !units.is_finite() {
        return None;
    }
    let cents = (units * 100.0).round();
    if cents.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(cents as Cents)
}

/// Convert cents into the unit amount written to disk.
pub fn cents_to_units(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}' (use e.g. '50.00' or '50')")]
    InvalidFormat(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}
