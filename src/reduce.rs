// 🔢 Digit Reducer - master-number fixed points
// The stopping condition is checked AFTER every digit-sum step, not just on
// the input. 38 → 11 and stays 11 (master), it does NOT continue to 2.
// This matches the reference engine exactly; do not "fix" it.

/// Master numbers: terminal values exempt from full reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Sum of the decimal digits of n.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Reduce n to a single digit, stopping early on 11 / 22 / 33.
///
/// reduce_with_master(38) == 11 (3+8 = 11, master, stop)
/// reduce_with_master(39) == 3  (3+9 = 12 → 1+2 = 3)
pub fn reduce_with_master(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Force a full collapse to one digit: reduce, then break a master with one
/// extra digit-sum pass (11→2, 22→4, 33→6). Used only by Four Elements.
pub fn collapse_to_single_digit(n: u32) -> u32 {
    let reduced = reduce_with_master(n);
    if is_master(reduced) {
        digit_sum(reduced)
    } else {
        reduced
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(38), 11);
        assert_eq!(digit_sum(123), 6);
        assert_eq!(digit_sum(999), 27);
    }

    #[test]
    fn test_master_fixed_points() {
        assert_eq!(reduce_with_master(11), 11);
        assert_eq!(reduce_with_master(22), 22);
        assert_eq!(reduce_with_master(33), 33);
    }

    #[test]
    fn test_reduce_38_stops_at_11() {
        // Golden value: the loop lands on 11 after one step and stops.
        assert_eq!(reduce_with_master(38), 11);
    }

    #[test]
    fn test_reduce_landing_past_master() {
        // 39 → 12 → 3, never lands on a master
        assert_eq!(reduce_with_master(39), 3);
        // 56 → 11, master, stop
        assert_eq!(reduce_with_master(56), 11);
        // 47 → 11, master, stop
        assert_eq!(reduce_with_master(47), 11);
        // 48 → 12 → 3
        assert_eq!(reduce_with_master(48), 3);
    }

    #[test]
    fn test_single_digits_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce_with_master(n), n);
        }
    }

    #[test]
    fn test_range_property() {
        // For n ≥ 1 not reducing onto a master, result is in [1,9]
        for n in 1..=1000u32 {
            let r = reduce_with_master(n);
            assert!((1..=9).contains(&r) || MASTER_NUMBERS.contains(&r), "reduce({}) = {}", n, r);
        }
    }

    #[test]
    fn test_collapse_masters() {
        assert_eq!(collapse_to_single_digit(11), 2);
        assert_eq!(collapse_to_single_digit(22), 4);
        assert_eq!(collapse_to_single_digit(33), 6);
        assert_eq!(collapse_to_single_digit(38), 2); // 38 → 11 → 2
        assert_eq!(collapse_to_single_digit(7), 7);
    }
}
