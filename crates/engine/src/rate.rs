use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Non-negative percentage stored as **integer basis points**.
///
/// Tax and tip rates follow the same philosophy as [`MoneyCents`]: integers at
/// rest, formatting and fractional math at the edges. Percent input with up to
/// two fraction digits maps exactly (`"8.25"` → 825 bps), so no precision is
/// lost between what the user typed and what the engine applies.
///
/// [`MoneyCents`]: crate::MoneyCents
///
/// # Examples
///
/// ```rust
/// use engine::Rate;
///
/// let tip: Rate = "20".parse().unwrap();
/// assert_eq!(tip.basis_points(), 2000);
/// assert_eq!(tip.as_fraction(), 0.20);
/// assert_eq!(tip.to_string(), "20%");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Rate(u32);

impl Rate {
    pub const ZERO: Rate = Rate(0);

    /// Creates a rate from integer basis points (1% = 100 bps).
    #[must_use]
    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// Creates a rate from a whole percentage.
    #[must_use]
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    /// Returns the raw value in basis points.
    #[must_use]
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Returns `true` if the rate is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the rate as a fraction suitable for multiplication
    /// (`20%` → `0.20`).
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 10_000.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

impl FromStr for Rate {
    type Err = EngineError;

    /// Parses a percent string into basis points.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional trailing `%`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `8.255`)
    /// - rejects negative, empty, and non-numeric strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidRate("empty rate".to_string());
        let invalid = || EngineError::InvalidRate("invalid rate".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }
        if trimmed.starts_with('-') {
            return Err(EngineError::InvalidRate("rate must be >= 0".to_string()));
        }

        let rest = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let whole_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if whole_str.is_empty() || !whole_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u32 = whole_str.parse().map_err(|_| invalid())?;

        let frac: u32 = match frac_str {
            None => 0,
            Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    0 => 0,
                    1 => frac.parse::<u32>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<u32>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidRate("too many decimals".to_string())),
                }
            }
        };

        let bps = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(|| EngineError::InvalidRate("rate too large".to_string()))?;

        Ok(Rate(bps))
    }
}
