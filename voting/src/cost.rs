//! The quadratic pricing law.
//!
//! Integer arithmetic only: `u32` vote counts square into `u64` credits
//! without overflow.

/// Credits needed to hold `votes` votes on a single target.
pub fn quadratic_cost(votes: u32) -> u64 {
    let v = u64::from(votes);
    v * v
}

/// Credits the `nth` vote on a single target adds on top of the previous
/// `nth - 1` votes (`2n - 1`). The zeroth vote is free.
pub fn marginal_cost(nth: u32) -> u64 {
    if nth == 0 {
        0
    } else {
        2 * u64::from(nth) - 1
    }
}

/// Largest vote count on one target whose cost fits in `credits`.
pub fn max_affordable_votes(credits: u64) -> u32 {
    // floor(sqrt(credits)), capped at u32::MAX.
    let (mut lo, mut hi) = (0u64, u64::from(u32::MAX));
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if mid * mid <= credits {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_law_fixed_points() {
        assert_eq!(quadratic_cost(0), 0);
        assert_eq!(quadratic_cost(1), 1);
        assert_eq!(quadratic_cost(3), 9);
        assert_eq!(quadratic_cost(10), 100);
    }

    #[test]
    fn cost_does_not_overflow_at_max() {
        assert_eq!(quadratic_cost(u32::MAX), (u32::MAX as u64) * (u32::MAX as u64));
    }

    #[test]
    fn marginal_costs_sum_to_total() {
        let total: u64 = (1..=7).map(marginal_cost).sum();
        assert_eq!(total, quadratic_cost(7));
        assert_eq!(marginal_cost(0), 0);
        assert_eq!(marginal_cost(5), 9);
    }

    #[test]
    fn max_affordable_is_floor_sqrt() {
        assert_eq!(max_affordable_votes(0), 0);
        assert_eq!(max_affordable_votes(3), 1);
        assert_eq!(max_affordable_votes(99), 9);
        assert_eq!(max_affordable_votes(100), 10);
        assert_eq!(max_affordable_votes(u64::MAX), u32::MAX);
    }
}
