//! Bounded quality arithmetic.
//!
//! Only *changes* are clamped: a value that starts outside
//! `[MIN_QUALITY, MAX_QUALITY]` is left alone until an increase or decrease
//! actually fires on it.

/// Upper bound applied by every quality increase.
pub const MAX_QUALITY: i64 = 50;

/// Lower bound applied by every quality decrease.
pub const MIN_QUALITY: i64 = 0;

/// Increase `value` by `by`, capped at [`MAX_QUALITY`].
pub fn raise(value: i64, by: i64) -> i64 {
    value.saturating_add(by).min(MAX_QUALITY)
}

/// Decrease `value` by `by`, floored at [`MIN_QUALITY`].
pub fn lower(value: i64, by: i64) -> i64 {
    value.saturating_sub(by).max(MIN_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_caps_at_max() {
        assert_eq!(raise(30, 1), 31);
        assert_eq!(raise(49, 3), 50);
        assert_eq!(raise(50, 1), 50);
    }

    #[test]
    fn raise_snaps_out_of_range_values_down() {
        assert_eq!(raise(80, 1), 50);
    }

    #[test]
    fn lower_floors_at_min() {
        assert_eq!(lower(10, 1), 9);
        assert_eq!(lower(1, 2), 0);
        assert_eq!(lower(0, 1), 0);
    }

    #[test]
    fn lower_keeps_out_of_range_values_above_max() {
        assert_eq!(lower(80, 2), 78);
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(raise(i64::MAX, 3), MAX_QUALITY);
        assert_eq!(lower(i64::MIN, 4), MIN_QUALITY);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn raise_never_exceeds_max(value in any::<i64>(), by in 0i64..=3) {
                prop_assert!(raise(value, by) <= MAX_QUALITY);
            }

            #[test]
            fn lower_never_goes_below_min(value in any::<i64>(), by in 0i64..=4) {
                prop_assert!(lower(value, by) >= MIN_QUALITY);
            }
        }
    }
}
