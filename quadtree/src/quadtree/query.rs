use super::SpatialTree;
use crate::collider::{Collider, ColliderId};
use common::shapes::Rectangle;
use fxhash::FxHashSet;

impl SpatialTree {
    /// Broad-phase candidates for `collider`.
    ///
    /// Every collider filed in a leaf the query rectangle overlaps is
    /// returned, overlapping or not, so the result is a superset of the true
    /// contacts. A root that is still a leaf returns everything it holds.
    /// The query collider itself is included when it is in the tree.
    pub fn get_neighbors<C: Collider + ?Sized>(&self, collider: &C) -> FxHashSet<ColliderId> {
        self.neighbors_of_rect(&collider.rectangle())
    }

    pub fn neighbors_of_rect(&self, rect: &Rectangle) -> FxHashSet<ColliderId> {
        let mut neighbors = FxHashSet::default();
        self.neighbors_into(rect, &mut neighbors);
        neighbors
    }

    /// Same as [`SpatialTree::neighbors_of_rect`] but fills a caller-owned set.
    /// The set is not cleared first.
    pub fn neighbors_into(&self, rect: &Rectangle, neighbors: &mut FxHashSet<ColliderId>) {
        self.root.neighbors_into(rect, neighbors);
    }
}
