use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidThresholds {
        divide: usize,
        merge: usize,
    },
    InvalidRegion {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidThresholds { divide, merge } => {
                write!(
                    f,
                    "thresholds must be positive with divide > merge (divide: {}, merge: {})",
                    divide, merge
                )
            }
            QuadtreeError::InvalidRegion {
                min_x,
                min_y,
                max_x,
                max_y,
            } => {
                write!(
                    f,
                    "tree region must be finite with min <= max (min_x: {}, min_y: {}, max_x: {}, max_y: {})",
                    min_x, min_y, max_x, max_y
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
