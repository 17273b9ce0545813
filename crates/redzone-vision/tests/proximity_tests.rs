use redzone_base::{Rect, Vec2};
use redzone_vision::{classify, state_for_distance, Hull, SafetyState};

fn zone(x: i32, y: i32, w: i32, h: i32) -> Rect<i32> {
    Rect::new(Vec2::new(x, y), Vec2::new(w, h))
}

fn hull_of(points: &[(i32, i32)]) -> Hull {
    Hull {
        points: points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
    }
}

#[test]
fn test_no_hull_is_safe_sentinel() {
    let report = classify(None, zone(100, 100, 200, 200));
    assert_eq!(report.state, SafetyState::Safe);
    assert_eq!(report.distance, 0.0);
    assert_eq!(report.hand_point, Vec2::zero());
    assert_eq!(report.zone_point, Vec2::zero());
}

#[test]
fn test_empty_hull_degrades_to_sentinel() {
    let report = classify(Some(&hull_of(&[])), zone(100, 100, 200, 200));
    assert_eq!(report.state, SafetyState::Safe);
    assert_eq!(report.distance, 0.0);
}

#[test]
fn test_hull_inside_zone_is_danger() {
    let hull = hull_of(&[(150, 150), (180, 160), (170, 190)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));

    assert_eq!(report.state, SafetyState::Danger);
    assert_eq!(report.distance, 0.0);
    // Interior point clamps to itself; first point wins
    assert_eq!(report.hand_point, Vec2::new(150, 150));
    assert_eq!(report.zone_point, Vec2::new(150, 150));
}

#[test]
fn test_contact_bound_is_inclusive() {
    // 10 px left of the zone edge: distance exactly 10
    let hull = hull_of(&[(90, 150)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));
    assert_eq!(report.distance, 10.0);
    assert_eq!(report.state, SafetyState::Danger);

    let hull = hull_of(&[(89, 150)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));
    assert_eq!(report.distance, 11.0);
    assert_eq!(report.state, SafetyState::Warning);
}

#[test]
fn test_safe_bound_is_exclusive() {
    assert_eq!(state_for_distance(150.0), SafetyState::Safe);
    assert_eq!(state_for_distance(149.999), SafetyState::Warning);
    assert_eq!(state_for_distance(10.0), SafetyState::Danger);
    assert_eq!(state_for_distance(10.001), SafetyState::Warning);
    assert_eq!(state_for_distance(0.0), SafetyState::Danger);

    // Same at the geometry level: a point 150 px off the right edge
    let hull = hull_of(&[(350, 100)]);
    let report = classify(Some(&hull), zone(0, 0, 200, 200));
    assert_eq!(report.distance, 150.0);
    assert_eq!(report.state, SafetyState::Safe);
}

#[test]
fn test_warning_example() {
    let hull = hull_of(&[(50, 100)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));

    assert_eq!(report.zone_point, Vec2::new(100, 100));
    assert_eq!(report.distance, 50.0);
    assert_eq!(report.state, SafetyState::Warning);
}

#[test]
fn test_point_inside_zone_example() {
    let hull = hull_of(&[(102, 102)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));

    assert_eq!(report.distance, 0.0);
    assert_eq!(report.state, SafetyState::Danger);
}

#[test]
fn test_far_corner_example() {
    let hull = hull_of(&[(400, 400)]);
    let report = classify(Some(&hull), zone(0, 0, 200, 200));

    assert_eq!(report.zone_point, Vec2::new(200, 200));
    assert!((report.distance - 282.842712474619).abs() < 1e-9);
    assert_eq!(report.state, SafetyState::Safe);
}

#[test]
fn test_translation_symmetry() {
    let points = [(50, 100), (60, 90), (140, 260)];
    let offset = Vec2::new(37, -12);

    let base_report = classify(Some(&hull_of(&points)), zone(100, 100, 200, 200));

    let moved: Vec<(i32, i32)> = points
        .iter()
        .map(|&(x, y)| (x + offset.x, y + offset.y))
        .collect();
    let moved_zone = zone(100 + offset.x, 100 + offset.y, 200, 200);
    let moved_report = classify(Some(&hull_of(&moved)), moved_zone);

    assert_eq!(moved_report.state, base_report.state);
    assert_eq!(moved_report.distance, base_report.distance);
    assert_eq!(moved_report.hand_point, base_report.hand_point + offset);
    assert_eq!(moved_report.zone_point, base_report.zone_point + offset);
}

#[test]
fn test_tie_break_first_point_wins() {
    // Both points sit exactly 10 px off opposite edges
    let hull = hull_of(&[(90, 150), (310, 150)]);
    let report = classify(Some(&hull), zone(100, 100, 200, 200));

    assert_eq!(report.distance, 10.0);
    assert_eq!(report.hand_point, Vec2::new(90, 150));
    assert_eq!(report.zone_point, Vec2::new(100, 150));
}
