use rand::Rng;

/// Axis-aligned rectangle stored as min/max extents.
///
/// `y` grows downwards, so `top()` is `min_y` and `bottom()` is `max_y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rectangle {
    /// Builds a rectangle from its centre and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self {
            min_x: x - half_width,
            min_y: y - half_height,
            max_x: x + half_width,
            max_y: y + half_height,
        }
    }

    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center_x(&self) -> f32 {
        self.min_x + self.width() / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.min_y + self.height() / 2.0
    }

    pub fn left(&self) -> f32 {
        self.min_x
    }

    pub fn right(&self) -> f32 {
        self.max_x
    }

    pub fn top(&self) -> f32 {
        self.min_y
    }

    pub fn bottom(&self) -> f32 {
        self.max_y
    }

    /// Finite extents with `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Positive width and height.
    pub fn has_area(&self) -> bool {
        self.max_x > self.min_x && self.max_y > self.min_y
    }

    /// Strict overlap test: rectangles that only share an edge or a corner do
    /// not intersect, and a rectangle without area intersects nothing.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.has_area()
            && other.has_area()
            && self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    pub fn contains_rectangle(&self, inner: &Rectangle) -> bool {
        self.min_x <= inner.min_x
            && self.max_x >= inner.max_x
            && self.min_y <= inner.min_y
            && self.max_y >= inner.max_y
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns the same rectangle moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Splits the rectangle at its midpoint.
    ///
    /// Order: `[min_x/min_y, min_x/max_y, max_x/min_y, max_x/max_y]` quadrant.
    /// The split point is shared by every quadrant so the four always tile the
    /// parent exactly.
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let mid_x = self.center_x();
        let mid_y = self.center_y();
        [
            Rectangle::from_min_max(self.min_x, self.min_y, mid_x, mid_y),
            Rectangle::from_min_max(self.min_x, mid_y, mid_x, self.max_y),
            Rectangle::from_min_max(mid_x, self.min_y, self.max_x, mid_y),
            Rectangle::from_min_max(mid_x, mid_y, self.max_x, self.max_y),
        ]
    }

    /// Places a `width` x `height` rectangle uniformly at random inside `self`.
    ///
    /// When the rectangle is larger than `self` on an axis it is pinned to the
    /// minimum edge of that axis.
    pub fn random_rect_inside<R: Rng>(&self, width: f32, height: f32, rng: &mut R) -> Rectangle {
        let min_x = self.safe_randf32(rng, self.min_x, self.max_x - width);
        let min_y = self.safe_randf32(rng, self.min_y, self.max_y - height);
        Rectangle::from_min_max(min_x, min_y, min_x + width, min_y + height)
    }

    fn safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        }
    }
}
