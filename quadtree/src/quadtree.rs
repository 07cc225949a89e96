mod collisions;
mod config;
mod maintenance;
mod node;
mod query;

pub use config::{Config, DEFAULT_MAX_DEPTH, DIVIDE_THRESHOLD, MERGE_THRESHOLD};

use crate::collider::{Collider, ColliderId};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use log::debug;
use node::{LeafColliders, NodeKind, QuadNode};

/// Adaptive quadtree over axis-aligned colliders.
///
/// Leaves split into four midpoint quadrants once they hold
/// `divide_threshold` colliders, and internal nodes collapse back into a leaf
/// once their occupancy drops to `merge_threshold`. The gap between the two
/// thresholds keeps a node from flipping back and forth on every mutation.
///
/// The tree keeps ids, never the colliders themselves. Moving a collider
/// without calling [`SpatialTree::update`] leaves it filed under its old
/// rectangle.
#[derive(Debug)]
pub struct SpatialTree {
    root: QuadNode,
    config: Config,
}

impl SpatialTree {
    pub fn new(region: Rectangle) -> Self {
        Self {
            root: QuadNode::new_leaf(region, 0),
            config: Config::default(),
        }
    }

    pub fn new_with_config(region: Rectangle, config: Config) -> QuadtreeResult<Self> {
        config.validate()?;
        if !region.is_valid() {
            return Err(QuadtreeError::InvalidRegion {
                min_x: region.min_x,
                min_y: region.min_y,
                max_x: region.max_x,
                max_y: region.max_y,
            });
        }
        Ok(Self {
            root: QuadNode::new_leaf(region, 0),
            config,
        })
    }

    /// Files the collider under every leaf its rectangle overlaps.
    ///
    /// Returns `false`, leaving the tree untouched, when the rectangle has no
    /// overlap with the tree region.
    pub fn add<C: Collider + ?Sized>(&mut self, collider: &C) -> bool {
        let id = collider.id();
        let rect = collider.rectangle();
        let added = self.root.add(id, rect, &self.config);
        if !added {
            debug!("collider {} at {:?} is outside the tree region", id, rect);
        }
        added
    }

    /// Removes the collider by identity.
    ///
    /// With `check_bounds` only the quadrants overlapping the collider's
    /// current rectangle are searched. That is only correct when the collider
    /// has not moved since it was added; otherwise pass `false` and every node
    /// is searched.
    pub fn remove<C: Collider + ?Sized>(&mut self, collider: &C, check_bounds: bool) -> bool {
        let rect = collider.rectangle();
        self.root
            .remove(collider.id(), &rect, check_bounds, &self.config)
    }

    /// Bounds-pruned removal for a collider that has not moved.
    pub fn remove_unmoved<C: Collider + ?Sized>(&mut self, collider: &C) -> bool {
        self.remove(collider, true)
    }

    /// Occupancy of the root.
    ///
    /// Exact while the root is a leaf. Once it has split, this counts
    /// insertions minus removals and is not a census of distinct colliders;
    /// see [`SpatialTree::collider_count`] for that.
    pub fn size(&self) -> usize {
        self.root.occupancy
    }

    pub fn region(&self) -> Rectangle {
        self.root.region
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Depth of the deepest leaf, 0 while the root is a leaf.
    pub fn depth(&self) -> usize {
        self.root.max_depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Regions of the root's quadrants, if the root has split.
    pub fn child_regions(&self) -> Option<[Rectangle; 4]> {
        match &self.root.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some([
                children[0].region,
                children[1].region,
                children[2].region,
                children[3].region,
            ]),
        }
    }

    // Retrieve all node regions, pre-order
    pub fn all_node_regions(&self, regions: &mut Vec<Rectangle>) {
        self.root.node_regions(regions);
    }

    pub fn all_colliders(&self) -> FxHashSet<ColliderId> {
        let mut ids = FxHashSet::default();
        self.root.for_each_leaf(None, &mut |colliders: &LeafColliders| {
            ids.extend(colliders.keys().copied());
        });
        ids
    }

    /// Number of distinct colliders filed anywhere in the tree.
    pub fn collider_count(&self) -> usize {
        self.all_colliders().len()
    }
}
