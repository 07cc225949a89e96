use crate::error::{QuadtreeError, QuadtreeResult};

pub const DIVIDE_THRESHOLD: usize = 10;
pub const MERGE_THRESHOLD: usize = 5;
pub const DEFAULT_MAX_DEPTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Leaf occupancy at which the leaf splits into quadrants.
    pub divide_threshold: usize,
    /// Internal occupancy at or below which the node collapses into a leaf.
    pub merge_threshold: usize,
    /// Leaves at this depth keep growing instead of splitting.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            divide_threshold: DIVIDE_THRESHOLD,
            merge_threshold: MERGE_THRESHOLD,
            // 4^8 leaves is far more resolution than a single level needs.
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.merge_threshold == 0 || self.divide_threshold <= self.merge_threshold {
            return Err(QuadtreeError::InvalidThresholds {
                divide: self.divide_threshold,
                merge: self.merge_threshold,
            });
        }
        Ok(())
    }
}
