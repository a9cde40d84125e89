//! Random permutation.

use rand::Rng;

use crate::iteration::{Collection, Flow};
use crate::value::Value;

/// Returns the visited items of `collection` in uniformly random order.
///
/// Uses the thread-local generator; see [`shuffle_with`] for a seeded one.
/// The input is left untouched.
///
/// ```rust
/// use gather::array;
/// use gather::ordering::shuffle;
/// use gather::value::Value;
///
/// let mut shuffled = shuffle(&array![1, 2, 3]);
/// shuffled.sort_by(|left, right| left.to_number().total_cmp(&right.to_number()));
/// assert_eq!(Value::from(shuffled), array![1, 2, 3]);
/// ```
pub fn shuffle(collection: &Value) -> Vec<Value> {
    shuffle_with(collection, &mut rand::rng())
}

/// Returns the visited items of `collection` in random order drawn from `rng`.
///
/// Inside-out Fisher–Yates: the `i`-th visited item swaps into a slot drawn
/// uniformly from `0..=i`, and the occupant of that slot moves to `i`.
///
/// ```rust
/// use gather::array;
/// use gather::ordering::shuffle_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let first = shuffle_with(&array![1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&array![1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<R>(collection: &Value, rng: &mut R) -> Vec<Value>
where
    R: Rng + ?Sized,
{
    let mut shuffled = Vec::new();
    Collection::classify(collection).traverse(|item, _, _| {
        let index = shuffled.len();
        shuffled.push(item.clone());
        if index > 0 {
            let slot = rng.random_range(0..=index);
            shuffled.swap(slot, index);
        }
        Flow::Continue
    });
    shuffled
}
