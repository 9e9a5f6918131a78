//! Vector helpers, bias grids and seeded randomness.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast seedable RNG used for sample shuffling.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Dot product of two equal-length vectors.
///
/// Callers are responsible for matching lengths; extra elements of the
/// longer slice are ignored.
#[inline]
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// # Overview
///
/// `num` evenly spaced values from `start` to `stop`, both ends included.
///
/// A single point yields `[start]`; zero points yield an empty vector.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::utils::linspace;
///
/// assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use perceptron_winnow::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Shuffles a slice in-place using Fisher-Yates algorithm.
#[inline]
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let len = slice.len();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn linspace_inclusive_ends() {
        let xs = linspace(-1000.0, 1000.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], -1000.0);
        assert_eq!(xs[999], 1000.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(3.0, 7.0, 2), vec![3.0, 7.0]);
    }

    #[test]
    fn rng_deterministic() {
        let mut rng1 = rng_from_seed(42);
        let mut rng2 = rng_from_seed(42);

        for _ in 0..100 {
            assert_eq!(rng1.random::<u64>(), rng2.random::<u64>());
        }
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut data = vec![1, 2, 3, 4, 5];
        let original = data.clone();
        let mut rng = rng_from_seed(42);

        shuffle(&mut data, &mut rng);

        data.sort();
        assert_eq!(data, original);
    }
}
