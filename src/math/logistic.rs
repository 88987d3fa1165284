//! Logistic function and percentage rounding.
//!
//! The scorer maps a linear score to a probability via the sigmoid:
//!
//! - `sigmoid(x) = 1 / (1 + exp(-x))`
//!
//! Numerical notes:
//! - For large negative `x`, `exp(-x)` overflows long before the result would
//!   underflow. We evaluate the algebraically equivalent
//!   `exp(x) / (1 + exp(x))` on the negative branch so both tails stay finite
//!   and strictly inside (0, 1) for any finite input.
//! - Displayed percentages use half-to-even rounding, implemented explicitly
//!   (`f64::round` is half-away-from-zero).

/// Compute `1 / (1 + exp(-x))` in a numerically stable way.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Round to the nearest integer, ties to even.
///
/// Only used for non-negative display values (percentages in [0, 100]).
pub fn round_half_even(v: f64) -> u32 {
    let floor = v.floor();
    let frac = v - floor;
    let base = floor as u32;

    if frac > 0.5 {
        base + 1
    } else if frac < 0.5 {
        base
    } else if base % 2 == 0 {
        base
    } else {
        base + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn sigmoid_reference_values() {
        // sigmoid(2.2) ≈ 0.9002, sigmoid(-4.0) ≈ 0.0180, sigmoid(-1.8) ≈ 0.1419
        assert!((sigmoid(2.2) - 0.9002).abs() < 5e-5);
        assert!((sigmoid(-4.0) - 0.0180).abs() < 5e-5);
        assert!((sigmoid(-1.8) - 0.1419).abs() < 5e-5);
    }

    #[test]
    fn sigmoid_symmetry() {
        for &x in &[0.1, 1.0, 2.2, 4.0, 10.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sigmoid_open_interval_for_finite_input() {
        for &x in &[-700.0, -50.0, -4.0, 0.0, 2.6, 50.0, 700.0] {
            let p = sigmoid(x);
            assert!(p > 0.0 && p < 1.0, "sigmoid({x}) = {p} escaped (0,1)");
        }
    }

    #[test]
    fn round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
    }

    #[test]
    fn round_half_even_non_ties() {
        assert_eq!(round_half_even(2.4), 2);
        assert_eq!(round_half_even(2.6), 3);
        assert_eq!(round_half_even(90.02), 90);
        assert_eq!(round_half_even(14.19), 14);
        assert_eq!(round_half_even(0.0), 0);
        assert_eq!(round_half_even(100.0), 100);
    }
}
