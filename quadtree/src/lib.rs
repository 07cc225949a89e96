pub mod collider;
pub mod collision_detection;
pub mod error;
pub mod quadtree;

pub use collider::{BoxCollider, Collider, ColliderId};
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, SpatialTree, DIVIDE_THRESHOLD, MERGE_THRESHOLD};
