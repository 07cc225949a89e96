use common::shapes::Rectangle;
use std::fmt;

/// Stable identity of a collider owned by the host.
///
/// Membership in the tree is decided by this id alone. Two colliders with the
/// same bounds but different ids are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

impl fmt::Display for ColliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the tree needs from a collider component.
pub trait Collider {
    fn id(&self) -> ColliderId;

    /// Current bounding rectangle.
    fn rectangle(&self) -> Rectangle;
}

/// A bare id + rectangle collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub id: ColliderId,
    pub rectangle: Rectangle,
}

impl BoxCollider {
    pub fn new(id: u32, rectangle: Rectangle) -> Self {
        Self {
            id: ColliderId(id),
            rectangle,
        }
    }

    pub fn set_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangle = rectangle;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.rectangle = self.rectangle.translated(dx, dy);
    }
}

impl Collider for BoxCollider {
    fn id(&self) -> ColliderId {
        self.id
    }

    fn rectangle(&self) -> Rectangle {
        self.rectangle
    }
}
