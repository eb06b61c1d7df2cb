//! Random integer arrays for the sorting algorithms

use rand::Rng;

/// `size` integers sampled uniformly from `[min, max]` (bounds swapped if inverted)
pub fn generate_array<R: Rng + ?Sized>(rng: &mut R, size: usize, min: i32, max: i32) -> Vec<i32> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (0..size).map(|_| rng.random_range(low..=high)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_values_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let values = generate_array(&mut rng, 500, 10, 309);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (10..=309).contains(v)));
    }

    #[test]
    fn test_inverted_bounds_and_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(generate_array(&mut rng, 50, 9, -9)
            .iter()
            .all(|v| (-9..=9).contains(v)));
        assert_eq!(generate_array(&mut rng, 3, 4, 4), vec![4, 4, 4]);
        assert!(generate_array(&mut rng, 0, 1, 2).is_empty());
    }
}
