#![no_std]

//! Basis-point arithmetic shared by the sale, referral and vesting contracts.
//!
//! Every helper truncates toward zero and returns `None` instead of
//! overflowing or dividing by zero, so contracts can map the failure onto
//! their own error type.

/// 100% expressed in basis points.
pub const BASIS_POINTS: u32 = 10_000;

/// `amount * bps / 10_000`, truncated toward zero.
pub fn percent_of(amount: i128, bps: u32) -> Option<i128> {
    mul_div(amount, bps as i128, BASIS_POINTS as i128)
}

/// `a * b / denominator` with checked multiplication.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(denominator)
}

/// True for a percentage usable as a rate: `1..=10_000`.
pub fn is_valid_bps(bps: u32) -> bool {
    bps > 0 && bps <= BASIS_POINTS
}

/// `10^decimals` as a token base-unit scale.
pub fn unit_scale(decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals)
}

/// Rounds `amount` down to a whole multiple of `unit`.
pub fn floor_to_unit(amount: i128, unit: i128) -> Option<i128> {
    if unit <= 0 {
        return None;
    }
    amount.checked_sub(amount.checked_rem(unit)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_percent_of_truncates() {
        assert_eq!(percent_of(17_500, 500), Some(875));
        assert_eq!(percent_of(50, 350), Some(1));
        assert_eq!(percent_of(500_000_000, 350), Some(17_500_000));
        assert_eq!(percent_of(0, 5_000), Some(0));
        assert_eq!(percent_of(99, 1), Some(0));
    }

    #[test]
    fn test_percent_of_full_rate_is_identity() {
        assert_eq!(percent_of(123_456_789, BASIS_POINTS), Some(123_456_789));
    }

    #[test]
    fn test_mul_div_guards() {
        assert_eq!(mul_div(10, 10, 0), None);
        assert_eq!(mul_div(i128::MAX, 2, 1), None);
        assert_eq!(mul_div(7, 3, 2), Some(10));
    }

    #[test]
    fn test_bps_bounds() {
        assert!(!is_valid_bps(0));
        assert!(is_valid_bps(1));
        assert!(is_valid_bps(10_000));
        assert!(!is_valid_bps(10_001));
    }

    #[test]
    fn test_unit_scale_and_floor() {
        let unit = unit_scale(7).unwrap();
        assert_eq!(unit, 10_000_000);
        assert_eq!(floor_to_unit(25_000_000, unit), Some(20_000_000));
        assert_eq!(floor_to_unit(9_999_999, unit), Some(0));
        assert_eq!(floor_to_unit(10, 0), None);
        assert_eq!(unit_scale(39), None);
    }
}
