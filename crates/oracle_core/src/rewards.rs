//! Proportional reward allocation.

use crate::round_dp;

/// Distributes `pool` across miners in proportion to score.
///
/// Returns `(uid, amount)` pairs in input order, each amount rounded
/// to six decimals. When the total score is zero (no miners, or every
/// score zero) every share is zero; there is no division by zero.
#[must_use]
pub fn allocate(scores: &[(u64, f64)], pool: f64) -> Vec<(u64, f64)> {
    let total: f64 = scores.iter().map(|(_, score)| score).sum();
    scores
        .iter()
        .map(|(uid, score)| {
            let amount = if total > 0.0 {
                round_dp(pool * score / total, 6)
            } else {
                0.0
            };
            (*uid, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_proportional() {
        let shares = allocate(&[(1, 0.9), (2, 0.3)], 1.2);
        assert_eq!(shares[0], (1, 0.9));
        assert_eq!(shares[1], (2, 0.3));
    }

    #[test]
    fn test_allocation_conserves_pool() {
        let scores = vec![(1, 0.9431), (2, 0.7212), (3, 0.505), (4, 0.1111)];
        let pool = 0.1533;
        let total: f64 = allocate(&scores, pool).iter().map(|(_, amt)| amt).sum();
        assert!((total - pool).abs() < 1e-6, "allocated {total} vs pool {pool}");
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        assert!(allocate(&[], 1.0).is_empty());
        let shares = allocate(&[(1, 0.0), (2, 0.0)], 1.0);
        assert!(shares.iter().all(|(_, amt)| *amt == 0.0));
    }
}
