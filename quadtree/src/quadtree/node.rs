use super::Config;
use crate::collider::ColliderId;
use crate::collision_detection;
use common::shapes::Rectangle;
use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace};

/// Colliders filed in a leaf, keyed by identity. The rectangle is the one the
/// collider had when it was filed and is what subdivide/merge redistribute.
pub(crate) type LeafColliders = FxHashMap<ColliderId, Rectangle>;

#[derive(Debug)]
pub(crate) enum NodeKind {
    Leaf(LeafColliders),
    Internal(Box<[QuadNode; 4]>),
}

#[derive(Debug)]
pub(crate) struct QuadNode {
    pub(crate) region: Rectangle,
    // Exact for leaves. For internal nodes this is a tally of successful
    // insertions minus successful removals, not a recount of the subtree.
    pub(crate) occupancy: usize,
    pub(crate) depth: usize,
    pub(crate) kind: NodeKind,
}

impl QuadNode {
    pub(crate) fn new_leaf(region: Rectangle, depth: usize) -> Self {
        Self {
            region,
            occupancy: 0,
            depth,
            kind: NodeKind::Leaf(FxHashMap::default()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub(crate) fn add(&mut self, id: ColliderId, rect: Rectangle, config: &Config) -> bool {
        let overflow = match &mut self.kind {
            NodeKind::Leaf(colliders) => {
                if !collision_detection::rectangle_rectangle(&self.region, &rect) {
                    return false;
                }
                if colliders.insert(id, rect).is_none() {
                    self.occupancy += 1;
                }
                if self.occupancy >= config.divide_threshold && self.depth < config.max_depth {
                    Some(std::mem::take(colliders))
                } else {
                    None
                }
            }
            NodeKind::Internal(children) => {
                // Fan out to every quadrant the rectangle overlaps.
                let mut added = false;
                for child in children.iter_mut() {
                    if collision_detection::rectangle_rectangle(&child.region, &rect) {
                        added |= child.add(id, rect, config);
                    }
                }
                if added {
                    self.occupancy += 1;
                }
                return added;
            }
        };

        if let Some(colliders) = overflow {
            self.kind = NodeKind::Internal(self.split(colliders, config));
        }
        true
    }

    /// Builds the four midpoint quadrants and files every collider of the
    /// former leaf into each quadrant it overlaps. The node's own occupancy is
    /// left untouched.
    fn split(&self, colliders: LeafColliders, config: &Config) -> Box<[QuadNode; 4]> {
        trace!(
            "subdividing node at depth {} ({:?}) with occupancy {}",
            self.depth,
            self.region,
            self.occupancy
        );
        let depth = self.depth + 1;
        let mut children = Box::new(
            self.region
                .quadrants()
                .map(|region| QuadNode::new_leaf(region, depth)),
        );
        for (id, rect) in colliders {
            for child in children.iter_mut() {
                if collision_detection::rectangle_rectangle(&child.region, &rect) {
                    child.add(id, rect, config);
                }
            }
        }
        children
    }

    pub(crate) fn remove(
        &mut self,
        id: ColliderId,
        rect: &Rectangle,
        check_bounds: bool,
        config: &Config,
    ) -> bool {
        let gathered = match &mut self.kind {
            NodeKind::Leaf(colliders) => {
                let removed = colliders.remove(&id).is_some();
                if removed {
                    self.occupancy -= 1;
                }
                return removed;
            }
            NodeKind::Internal(children) => {
                let mut removed = false;
                for child in children.iter_mut() {
                    if check_bounds && !collision_detection::rectangle_rectangle(&child.region, rect)
                    {
                        continue;
                    }
                    if child.remove(id, rect, check_bounds, config) {
                        removed = true;
                    }
                }
                if !removed {
                    return false;
                }
                self.occupancy = self.occupancy.saturating_sub(1);
                if self.occupancy > config.merge_threshold {
                    return true;
                }

                // Deepest nodes give up their colliders first; the map keeps
                // one entry per collider however many quadrants it spanned.
                let mut gathered = FxHashMap::default();
                for child in children.iter_mut() {
                    child.drain_into(&mut gathered);
                }
                gathered
            }
        };

        self.merge(gathered, config);
        true
    }

    /// Collapses this node into a leaf and re-files `gathered` through the
    /// ordinary insertion path. The node splits again only when `gathered`
    /// outnumbers the tally, which takes colliders filed below this node
    /// without passing through it.
    fn merge(&mut self, gathered: LeafColliders, config: &Config) {
        trace!(
            "merging node at depth {} ({:?}) with occupancy {}, {} colliders gathered",
            self.depth,
            self.region,
            self.occupancy,
            gathered.len()
        );
        self.kind = NodeKind::Leaf(FxHashMap::default());
        self.occupancy = 0;
        for (id, rect) in gathered {
            self.add(id, rect, config);
        }
        if !self.is_leaf() {
            debug!(
                "node at depth {} re-subdivided while merging (occupancy {})",
                self.depth, self.occupancy
            );
        }
    }

    fn drain_into(&mut self, out: &mut LeafColliders) {
        match &mut self.kind {
            NodeKind::Leaf(colliders) => out.extend(colliders.drain()),
            NodeKind::Internal(children) => {
                for child in children.iter_mut() {
                    child.drain_into(out);
                }
            }
        }
    }

    pub(crate) fn neighbors_into(&self, rect: &Rectangle, out: &mut FxHashSet<ColliderId>) {
        match &self.kind {
            // Whole leaf, whether or not each member overlaps `rect`.
            NodeKind::Leaf(colliders) => out.extend(colliders.keys().copied()),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    if collision_detection::rectangle_rectangle(&child.region, rect) {
                        child.neighbors_into(rect, out);
                    }
                }
            }
        }
    }

    /// Visits the leaves overlapping `rect`; every leaf when `rect` is `None`.
    pub(crate) fn for_each_leaf<F>(&self, rect: Option<&Rectangle>, f: &mut F)
    where
        F: FnMut(&LeafColliders),
    {
        match &self.kind {
            NodeKind::Leaf(colliders) => f(colliders),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    let visit = match rect {
                        Some(rect) => collision_detection::rectangle_rectangle(&child.region, rect),
                        None => true,
                    };
                    if visit {
                        child.for_each_leaf(rect, f);
                    }
                }
            }
        }
    }

    pub(crate) fn node_regions(&self, regions: &mut Vec<Rectangle>) {
        regions.push(self.region);
        if let NodeKind::Internal(children) = &self.kind {
            for child in children.iter() {
                child.node_regions(regions);
            }
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => {
                1 + children.iter().map(QuadNode::node_count).sum::<usize>()
            }
        }
    }

    pub(crate) fn max_depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => self.depth,
            NodeKind::Internal(children) => children
                .iter()
                .map(QuadNode::max_depth)
                .max()
                .unwrap_or(self.depth),
        }
    }
}
