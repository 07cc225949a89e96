use common::shapes::Rectangle;

// Strict overlap, shared with every region check the tree makes
pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.intersects(b)
}
