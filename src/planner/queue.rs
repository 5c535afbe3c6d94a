//! Source queue builder.
//!
//! Expands one source's unit sequence into a consumable queue:
//! `repeats` independently shuffled permutations of the full unit list,
//! concatenated pass by pass. Because each pass is a complete
//! permutation, no unit can recur before every other unit of its pass
//! has been emitted.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Unit, MAX_REPEATS, MIN_REPEATS};

/// Builds the consumption queue for one source.
///
/// `repeats` is clamped to `[1, 3]`. An empty unit sequence yields an
/// empty queue regardless of the repeat count.
pub fn build_queue<R: Rng>(units: &[Unit], repeats: u32, rng: &mut R) -> VecDeque<Unit> {
    let repeats = repeats.clamp(MIN_REPEATS, MAX_REPEATS);
    let mut queue = VecDeque::with_capacity(units.len() * repeats as usize);
    let mut pass: Vec<Unit> = units.to_vec();
    for _ in 0..repeats {
        pass.shuffle(rng);
        queue.extend(pass.iter().copied());
    }
    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn units(total: u32) -> Vec<Unit> {
        Source::new("s", total).units
    }

    #[test]
    fn test_queue_length() {
        let units = units(64); // 7 units
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(build_queue(&units, 1, &mut rng).len(), 7);
        assert_eq!(build_queue(&units, 3, &mut rng).len(), 21);
    }

    #[test]
    fn test_each_pass_is_a_full_permutation() {
        let units = units(105); // 11 units
        let expected: HashSet<Unit> = units.iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let queue = build_queue(&units, 3, &mut rng);
        let flat: Vec<Unit> = queue.into_iter().collect();
        for pass in flat.chunks(units.len()) {
            let seen: HashSet<Unit> = pass.iter().copied().collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_empty_units() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_queue(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_repeats_clamped() {
        let units = units(20); // 2 units
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(build_queue(&units, 0, &mut rng).len(), 2);
        assert_eq!(build_queue(&units, 99, &mut rng).len(), 6);
    }

    #[test]
    fn test_seeded_determinism() {
        let units = units(157);
        let a = build_queue(&units, 2, &mut StdRng::seed_from_u64(7));
        let b = build_queue(&units, 2, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
