use super::{LeafColliders, SpatialTree};
use crate::collider::{Collider, ColliderId};
use crate::collision_detection;
use common::shapes::Rectangle;
use fxhash::FxHashSet;

impl SpatialTree {
    /// Colliders whose filed rectangle truly overlaps `collider`'s current
    /// rectangle, sorted by id. The query collider itself is excluded.
    ///
    /// This narrows [`SpatialTree::get_neighbors`] with the same strict
    /// overlap test the tree uses for its regions.
    pub fn collisions<C: Collider + ?Sized>(&self, collider: &C) -> Vec<ColliderId> {
        let mut collisions = Vec::new();
        self.collisions_into(collider.id(), &collider.rectangle(), &mut collisions);
        collisions
    }

    pub fn collisions_batch<C: Collider>(&self, colliders: &[C]) -> Vec<Vec<ColliderId>> {
        colliders
            .iter()
            .map(|collider| self.collisions(collider))
            .collect()
    }

    fn collisions_into(&self, id: ColliderId, rect: &Rectangle, collisions: &mut Vec<ColliderId>) {
        let mut seen = FxHashSet::default();
        self.root
            .for_each_leaf(Some(rect), &mut |colliders: &LeafColliders| {
                for (&other, other_rect) in colliders.iter() {
                    if other != id
                        && collision_detection::rectangle_rectangle(rect, other_rect)
                        && seen.insert(other)
                    {
                        collisions.push(other);
                    }
                }
            });
        collisions.sort_unstable();
    }

    /// Every pair of filed colliders whose rectangles overlap.
    ///
    /// Pairs are canonical (`a < b`), unique even when both colliders span
    /// several leaves, and sorted.
    pub fn collision_pairs(&self) -> Vec<(ColliderId, ColliderId)> {
        let mut pairs = FxHashSet::default();
        self.root
            .for_each_leaf(None, &mut |colliders: &LeafColliders| {
                let entries: Vec<_> = colliders.iter().collect();
                for (i, &(&a, a_rect)) in entries.iter().enumerate() {
                    for &(&b, b_rect) in entries.iter().skip(i + 1) {
                        if collision_detection::rectangle_rectangle(a_rect, b_rect) {
                            pairs.insert(if a < b { (a, b) } else { (b, a) });
                        }
                    }
                }
            });
        let mut pairs: Vec<_> = pairs.into_iter().collect();
        pairs.sort_unstable();
        pairs
    }
}
