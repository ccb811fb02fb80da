use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Unordered bag of pending items that hands them back in uniformly random order.
///
/// There is no deduplication, callers are expected to never push the same item twice.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierSet<T> {
    items: Vec<T>,
}

impl<T> FrontierSet<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes one item, each remaining item being equally likely to be picked.
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T> {
        if self.items.is_empty() {
            return Err(MazeError::EmptyFrontier);
        }
        let index = rng.random_range(0..self.items.len());
        // order carries no meaning, so filling the hole from the back is fine
        Ok(self.items.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FrontierSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FrontierSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FrontierSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn drains_every_item_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut frontier: FrontierSet<u32> = (0..50).collect();

        let mut seen = BTreeSet::new();
        for _ in 0..50 {
            let item = frontier.remove_random(&mut rng).unwrap();
            assert!(seen.insert(item));
        }

        assert!(frontier.is_empty());
        assert_eq!(seen.len(), 50);
        assert_eq!(
            frontier.remove_random(&mut rng),
            Err(MazeError::EmptyFrontier)
        );
    }

    #[test]
    fn empty_frontier_fails() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut frontier: FrontierSet<Coord2> = FrontierSet::new();

        assert_eq!(
            frontier.remove_random(&mut rng),
            Err(MazeError::EmptyFrontier)
        );
    }

    #[test]
    fn picks_are_spread_over_all_positions() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut hits = [0u32; 4];

        for _ in 0..4000 {
            let mut frontier: FrontierSet<usize> = (0..4).collect();
            hits[frontier.remove_random(&mut rng).unwrap()] += 1;
        }

        // each slot expects ~1000 hits
        assert!(hits.iter().all(|&count| (800..1200).contains(&count)), "{hits:?}");
    }

    #[test]
    fn push_and_extend_grow_the_set() {
        let mut frontier = FrontierSet::new();
        frontier.push((1, 2));
        frontier.extend([(3, 4), (5, 6)]);

        assert_eq!(frontier.len(), 3);
        assert!(!frontier.is_empty());
    }
}
