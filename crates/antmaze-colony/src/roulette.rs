//! Roulette-wheel selection over a small fixed set of weighted slots.

use rand::Rng;

/// Picks the slot whose cumulative weight interval contains `draw`, where
/// `draw` lies in `[0, total)`. Zero-weight slots are never picked, even when
/// `draw` sits exactly on their boundary.
///
/// Returns `None` when every weight is zero.
pub fn spin<const N: usize>(weights: &[f64; N], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last_live = None;
    for (i, &w) in weights.iter().enumerate() {
        if w == 0.0 {
            continue;
        }
        cumulative += w;
        last_live = Some(i);
        if draw < cumulative {
            return Some(i);
        }
    }
    // Rounding can leave `draw` a hair past the final boundary.
    last_live
}

/// Draws uniformly in `[0, total)` and spins the wheel. Returns `None` when the
/// total is zero or not a finite number.
pub fn choose<const N: usize, R: Rng + ?Sized>(weights: &[f64; N], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    spin(weights, rng.gen_range(0.0..total))
}
