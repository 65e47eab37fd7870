use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a scalar that makes a good double-and-add demonstration.
///
/// Exactly three of the six low bits are set, plus either `2^6` or `2^7`,
/// so the animation shows a handful of doublings and three additions.
pub fn pick_demo_scalar<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    let mut picks = [false, false, false, true, true, true];
    picks.shuffle(rng);

    let low: u64 = picks
        .iter()
        .enumerate()
        .filter(|(_, picked)| **picked)
        .map(|(bit, _)| 1u64 << bit)
        .sum();
    let high = if rng.random_bool(0.5) { 1 << 7 } else { 1 << 6 };

    low + high
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_scalar_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let n = pick_demo_scalar(&mut rng);
            assert_eq!((n & 0b11_1111).count_ones(), 3);
            let high = n & !0b11_1111;
            assert!(high == 64 || high == 128, "unexpected scalar {n}");
        }
    }
}
