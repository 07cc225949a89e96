use super::*;

impl SpatialTree {
    /// Re-files a collider that may have moved.
    ///
    /// Always removes through the full-tree path, since the collider's old
    /// rectangle is unknown, then adds it at its current rectangle. Returns
    /// the result of the add: `false` means the collider left the tree region
    /// and is no longer tracked.
    pub fn update<C: Collider + ?Sized>(&mut self, collider: &C) -> bool {
        self.remove(collider, false);
        self.add(collider)
    }

    /// Updates every collider and returns how many are still inside the tree.
    pub fn update_batch<C: Collider>(&mut self, colliders: &[C]) -> usize {
        colliders
            .iter()
            .filter(|collider| self.update(*collider))
            .count()
    }

    /// Drops every node and collider, keeping the region and config.
    pub fn clear(&mut self) {
        self.root = QuadNode::new_leaf(self.root.region, 0);
    }
}
