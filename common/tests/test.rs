use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.min_x(), 0.0);
    assert_eq!(rect.max_x(), 4.0);
    assert_eq!(rect.min_y(), 0.0);
    assert_eq!(rect.max_y(), 6.0);
    assert_eq!(rect.center_x(), 2.0);
    assert_eq!(rect.center_y(), 3.0);
    assert_eq!(rect.left(), rect.min_x());
    assert_eq!(rect.bottom(), rect.max_y());
}

#[test]
fn test_from_min_max_matches_center_form() {
    let a = Rectangle::new(5.0, 5.0, 10.0, 10.0);
    let b = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    assert_eq!(a, b);
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::from_min_max(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(Rectangle::from_min_max(1.0, 1.0, 1.0, 1.0).is_valid());
    assert!(!Rectangle::from_min_max(2.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!Rectangle::from_min_max(0.0, f32::NAN, 1.0, 1.0).is_valid());
    assert!(!Rectangle::from_min_max(0.0, 0.0, f32::INFINITY, 1.0).is_valid());
}

#[test]
fn test_intersects_overlap() {
    let a = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    let b = Rectangle::from_min_max(5.0, 5.0, 15.0, 15.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_intersects_contained() {
    let outer = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    let inner = Rectangle::from_min_max(2.0, 2.0, 3.0, 3.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_touching_edges_do_not_intersect() {
    let a = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    let right = Rectangle::from_min_max(10.0, 0.0, 20.0, 10.0);
    let below = Rectangle::from_min_max(0.0, 10.0, 10.0, 20.0);
    let corner = Rectangle::from_min_max(10.0, 10.0, 20.0, 20.0);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
    assert!(!a.intersects(&corner));
}

#[test]
fn test_degenerate_rectangle_never_intersects() {
    let a = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    let point = Rectangle::from_min_max(5.0, 5.0, 5.0, 5.0);
    let vertical = Rectangle::from_min_max(5.0, 2.0, 5.0, 8.0);
    let horizontal = Rectangle::from_min_max(2.0, 5.0, 8.0, 5.0);
    assert!(!a.intersects(&point));
    assert!(!a.intersects(&vertical));
    assert!(!a.intersects(&horizontal));
    assert!(!vertical.intersects(&a));
    assert!(!vertical.intersects(&vertical));
}

#[test]
fn test_has_area() {
    assert!(Rectangle::from_min_max(0.0, 0.0, 1.0, 1.0).has_area());
    assert!(!Rectangle::from_min_max(5.0, 2.0, 5.0, 8.0).has_area());
    assert!(!Rectangle::from_min_max(2.0, 5.0, 8.0, 5.0).has_area());
    assert!(!Rectangle::from_min_max(3.0, 3.0, 1.0, 1.0).has_area());
}

#[test]
fn test_contains_rectangle() {
    let outer = Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0);
    assert!(outer.contains_rectangle(&Rectangle::from_min_max(0.0, 0.0, 10.0, 10.0)));
    assert!(outer.contains_rectangle(&Rectangle::from_min_max(1.0, 1.0, 2.0, 2.0)));
    assert!(!outer.contains_rectangle(&Rectangle::from_min_max(5.0, 5.0, 11.0, 6.0)));
}

#[test]
fn test_contains_point() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert!(rect.contains_point(2.0, 3.0));
    assert!(rect.contains_point(0.0, 0.0));
    assert!(!rect.contains_point(6.0, 3.0));
    assert!(!rect.contains_point(2.0, 8.0));
}

#[test]
fn test_translated() {
    let rect = Rectangle::from_min_max(0.0, 0.0, 2.0, 3.0).translated(10.0, -1.0);
    assert_eq!(rect, Rectangle::from_min_max(10.0, -1.0, 12.0, 2.0));
}

#[test]
fn test_quadrants_tile_parent() {
    let rect = Rectangle::from_min_max(0.0, 0.0, 100.0, 60.0);
    let quadrants = rect.quadrants();
    assert_eq!(quadrants[0], Rectangle::from_min_max(0.0, 0.0, 50.0, 30.0));
    assert_eq!(quadrants[1], Rectangle::from_min_max(0.0, 30.0, 50.0, 60.0));
    assert_eq!(quadrants[2], Rectangle::from_min_max(50.0, 0.0, 100.0, 30.0));
    assert_eq!(quadrants[3], Rectangle::from_min_max(50.0, 30.0, 100.0, 60.0));

    let area: f32 = quadrants.iter().map(|q| q.width() * q.height()).sum();
    assert_eq!(area, rect.width() * rect.height());
    for (i, a) in quadrants.iter().enumerate() {
        assert!(rect.contains_rectangle(a));
        for b in quadrants.iter().skip(i + 1) {
            assert!(!a.intersects(b));
        }
    }
}

#[test]
fn test_random_rect_inside() {
    let rect = Rectangle::from_min_max(0.0, 0.0, 100.0, 50.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let placed = rect.random_rect_inside(4.0, 3.0, &mut rng);
        assert_eq!(placed.width(), 4.0);
        assert_eq!(placed.height(), 3.0);
        assert!(rect.contains_rectangle(&placed));
    }
}

#[test]
fn test_random_rect_inside_small_rectangle() {
    let rect = Rectangle::from_min_max(0.0, 0.0, 2.0, 2.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let placed = rect.random_rect_inside(5.0, 5.0, &mut rng);
    // An oversized rectangle is pinned to the minimum corner.
    assert_eq!(placed.min_x(), rect.min_x());
    assert_eq!(placed.min_y(), rect.min_y());
}
