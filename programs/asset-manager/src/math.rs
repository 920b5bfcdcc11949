//! Fixed-point helpers
//!
//! Percentages are `u64` fractions scaled by [`ONE`] (1.0 = 10^18). Products are
//! taken in `u128` and truncated, so every helper here rounds toward zero unless
//! its name says otherwise.

use anchor_lang::prelude::*;

use crate::error::AssetManagerError;

/// 1.0 in 18-decimal fixed point
pub const ONE: u64 = 1_000_000_000_000_000_000;

/// Basis point denominator
pub const BPS_POWER: u64 = 10_000;

/// `amount * fraction / ONE`, rounded down.
pub fn mul_down(amount: u64, fraction: u64) -> Result<u64> {
    mul_div_down(amount, fraction, ONE)
}

/// `a * b / c`, rounded down.
pub fn mul_div_down(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, AssetManagerError::MathOverflow);
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(AssetManagerError::MathOverflow)?;
    to_u64(product / c as u128)
}

/// `a * b / c`, rounded up.
pub fn mul_div_up(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, AssetManagerError::MathOverflow);
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(AssetManagerError::MathOverflow)?;
    to_u64(product.div_ceil(c as u128))
}

/// Portion of `amount` expressed in basis points, rounded down.
pub fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    mul_div_down(amount, bps, BPS_POWER)
}

/// Signed difference `a - b` without loss.
pub fn signed_delta(a: u64, b: u64) -> i128 {
    a as i128 - b as i128
}

fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(AssetManagerError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_down_truncates() {
        assert_eq!(mul_down(1_000_000_000_000_000_000, 800_000_000_000_000_000).unwrap(), 800_000_000_000_000_000);
        // 3 * 0.5 = 1.5 -> 1
        assert_eq!(mul_down(3, ONE / 2).unwrap(), 1);
        assert_eq!(mul_down(0, ONE).unwrap(), 0);
        assert_eq!(mul_down(u64::MAX, ONE).unwrap(), u64::MAX);
    }

    #[test]
    fn mul_down_overflow_is_an_error() {
        let err = mul_down(u64::MAX, 2 * ONE).unwrap_err();
        assert_eq!(err, error!(AssetManagerError::MathOverflow));
    }

    #[test]
    fn mul_div_rounding_directions() {
        assert_eq!(mul_div_down(10, 1, 3).unwrap(), 3);
        assert_eq!(mul_div_up(10, 1, 3).unwrap(), 4);
        assert_eq!(mul_div_up(9, 1, 3).unwrap(), 3);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(mul_div_down(1, 1, 0).is_err());
        assert!(mul_div_up(1, 1, 0).is_err());
    }

    #[test]
    fn bps_of_ten_percent() {
        assert_eq!(bps_of(800_000_000_000_000_000, 1_000).unwrap(), 80_000_000_000_000_000);
    }

    #[test]
    fn signed_delta_goes_negative() {
        assert_eq!(signed_delta(1, 3), -2);
        assert_eq!(signed_delta(u64::MAX, 0), u64::MAX as i128);
    }
}
