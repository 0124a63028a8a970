use rand::Rng;

/// Fisher-Yates shuffle into a new vector; `items` is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_shuffle_keeps_elements() {
        let source = vec![1, 2, 3, 4, 5, 6, 7];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let mut shuffled = shuffle(&source, &mut rng);
            assert_eq!(source, vec![1, 2, 3, 4, 5, 6, 7]);
            shuffled.sort();
            assert_eq!(shuffled, source);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_with_zero_source() {
        // Every draw picks index 0, so each position swaps with the head.
        let mut rng = StepRng::new(0, 0);
        assert_eq!(shuffle(&['a', 'b', 'c', 'd'], &mut rng), vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_shuffle_short_inputs() {
        let mut rng = StepRng::new(0, 0);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&["only"], &mut rng), vec!["only"]);
    }
}
