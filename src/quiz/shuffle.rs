//! Answer order randomisation

use rand::Rng;

/// Return a uniformly random permutation of `items`
///
/// The input slice is copied first, so the caller's data is never reordered.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Fisher–Yates shuffle of a copy of `items` using the given generator
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_and_single_are_identity() {
        let empty: Vec<u8> = vec![];
        assert_eq!(shuffle(&empty), empty);
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn input_is_not_reordered() {
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut rng = StdRng::seed_from_u64(7);
        let _ = shuffle_with(&original, &mut rng);
        assert_eq!(original, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut first_position_counts = [0usize; 4];
        let trials = 8_000;

        for _ in 0..trials {
            let shuffled = shuffle_with(&[0usize, 1, 2, 3], &mut rng);
            first_position_counts[shuffled[0]] += 1;
        }

        // Expect ~2000 each; the bounds only catch gross bias
        for count in first_position_counts {
            assert!((1_700..2_300).contains(&count), "biased count: {count}");
        }
    }

    proptest! {
        #[test]
        fn output_is_a_permutation(items in proptest::collection::vec(any::<u16>(), 0..32), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = shuffle_with(&items, &mut rng);

            prop_assert_eq!(shuffled.len(), items.len());
            let mut expected = items.clone();
            let mut actual = shuffled;
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
