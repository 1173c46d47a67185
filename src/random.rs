//! Random input for building trees.

use rand::Rng;

/// Generates `length` integers drawn uniformly from `min..max`. Duplicates are likely for small
/// ranges, which is fine since [`Tree::build_tree`][crate::Tree::build_tree] drops them. If `max`
/// is not greater than `min`, every value is `min`.
///
/// # Examples
///
/// ```
/// use balanced_bst::random::random_int_array;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let values = random_int_array(0, 100, 10, &mut rng);
///
/// assert_eq!(values.len(), 10);
/// assert!(values.iter().all(|v| (0..100).contains(v)));
/// ```
pub fn random_int_array<R>(min: i64, max: i64, length: usize, rng: &mut R) -> Vec<i64>
where
    R: Rng,
{
    if max <= min {
        return vec![min; length];
    }

    (0..length).map(|_| rng.gen_range(min..max)).collect()
}
