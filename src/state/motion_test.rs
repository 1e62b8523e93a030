#![allow(clippy::float_cmp)]

use super::*;
use crate::state::gesture::TouchEdge;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn thing(id: usize, x: f64, y: f64, selected: bool) -> Thing {
    Thing {
        selected,
        ..Thing::new(id, Point::new(x, y), 0.03)
    }
}

fn tuning(model: MotionModel) -> MotionTuning {
    MotionTuning {
        model,
        ..MotionTuning::default()
    }
}

fn gesturing(start: Rect, current: Rect) -> Gesture {
    Gesture::default()
        .recompute(TouchEdge::Down, Some(start))
        .recompute(TouchEdge::Move, Some(current))
}

// =============================================================
// Growth
// =============================================================

#[test]
fn growth_of_unchanged_rect_is_zero() {
    let r = Rect::new(0.2, 0.2, 0.3, 0.4);
    assert_eq!(growth(&r, &r), 0.0);
}

#[test]
fn spreading_fingers_is_negative_growth() {
    let start = Rect::new(0.4, 0.4, 0.2, 0.2);
    let spread = Rect::new(0.3, 0.3, 0.4, 0.4);
    assert_eq!(start.center(), spread.center());
    assert!(growth(&start, &spread) < 0.0);
}

#[test]
fn pinching_fingers_is_positive_growth() {
    let start = Rect::new(0.3, 0.3, 0.4, 0.4);
    let pinched = Rect::new(0.45, 0.45, 0.1, 0.1);
    assert!(growth(&start, &pinched) > 0.0);
}

#[test]
fn growth_multiplier_is_half_of_growth_within_bound() {
    let start = Rect::new(0.0, 0.0, 0.6, 0.8);
    let current = Rect::new(0.0, 0.0, 0.0, 0.0);
    // Half-diagonal 0.5 to 0.0.
    assert!(approx_eq(growth_multiplier(&start, &current, 1.0), 0.25));
}

#[test]
fn growth_multiplier_is_bounded() {
    let start = Rect::new(0.0, 0.0, 1.0, 1.0);
    let current = Rect::new(0.5, 0.5, 0.0, 0.0);
    assert!(approx_eq(growth_multiplier(&start, &current, 0.2), 0.1));
    assert!(approx_eq(growth_multiplier(&current, &start, 0.2), -0.1));
}

// =============================================================
// Idle
// =============================================================

#[test]
fn idle_zero_offset_leaves_positions_alone() {
    let things = vec![thing(0, 0.2, 0.3, false), thing(1, 1.0, 0.0, true)];
    for model in [MotionModel::Drift, MotionModel::Attract] {
        let mut current = things.clone();
        for _ in 0..5 {
            let m = advance(&current, &Gesture::default(), Point::ZERO, None, &tuning(model));
            assert_eq!(m.offset, Point::ZERO);
            current = m.things;
        }
        assert_eq!(current, things);
    }
}

#[test]
fn idle_drift_moves_every_thing_and_decays() {
    let things = vec![thing(0, 0.2, 0.2, false), thing(1, 0.5, 0.5, true)];
    let offset = Point::new(0.1, -0.05);
    let m = advance(&things, &Gesture::default(), offset, None, &tuning(MotionModel::Drift));
    assert!(approx_eq(m.things[0].x, 0.3));
    assert!(approx_eq(m.things[0].y, 0.15));
    assert!(approx_eq(m.things[1].x, 0.6));
    assert!(approx_eq(m.offset.x, 0.08));
    assert!(approx_eq(m.offset.y, -0.04));
}

#[test]
fn idle_drift_wraps_past_the_far_edge() {
    let things = vec![thing(0, 0.95, 0.5, false)];
    let m = advance(
        &things,
        &Gesture::default(),
        Point::new(0.1, 0.0),
        None,
        &tuning(MotionModel::Drift),
    );
    assert!(approx_eq(m.things[0].x, 0.05));
}

#[test]
fn idle_drift_wraps_below_zero() {
    let things = vec![thing(0, 0.02, 0.02, false)];
    let m = advance(
        &things,
        &Gesture::default(),
        Point::new(-0.04, -0.04),
        None,
        &tuning(MotionModel::Drift),
    );
    assert!(approx_eq(m.things[0].x, 0.98));
    assert!(approx_eq(m.things[0].y, 0.98));
}

#[test]
fn idle_drift_offset_comes_to_rest() {
    let things = vec![thing(0, 0.5, 0.5, false)];
    let t = tuning(MotionModel::Drift);
    let mut offset = Point::new(0.01, 0.01);
    let mut frames = 0;
    while offset != Point::ZERO {
        offset = advance(&things, &Gesture::default(), offset, None, &t).offset;
        frames += 1;
        assert!(frames < 100, "offset never settled");
    }
    // 0.01 * 0.8^n < 1e-4 first holds at n = 21.
    assert_eq!(frames, 21);
}

#[test]
fn idle_attract_keeps_things_and_offset() {
    let things = vec![thing(0, 0.2, 0.2, true)];
    let offset = Point::new(0.1, 0.1);
    let m = advance(&things, &Gesture::default(), offset, None, &tuning(MotionModel::Attract));
    assert_eq!(m.things, things);
    assert_eq!(m.offset, offset);
}

// =============================================================
// Gesturing: drift
// =============================================================

#[test]
fn drag_moves_only_selected_by_gain() {
    let things = vec![thing(0, 0.5, 0.5, true), thing(1, 0.2, 0.2, false)];
    let g = gesturing(Rect::new(0.5, 0.5, 0.0, 0.0), Rect::new(0.6, 0.5, 0.0, 0.0));
    let lead = Point::new(0.1, 0.0);
    let m = advance(&things, &g, Point::ZERO, Some(lead), &tuning(MotionModel::Drift));
    assert!(approx_eq(m.things[0].x, 0.57));
    assert!(approx_eq(m.things[0].y, 0.5));
    assert_eq!(m.things[1], things[1]);
    assert!(approx_eq(m.offset.x, 0.099));
}

#[test]
fn drag_without_lead_changes_nothing() {
    let things = vec![thing(0, 0.5, 0.5, true)];
    let g = gesturing(Rect::new(0.5, 0.5, 0.0, 0.0), Rect::new(0.5, 0.5, 0.0, 0.0));
    let offset = Point::new(0.02, 0.0);
    let m = advance(&things, &g, offset, None, &tuning(MotionModel::Drift));
    assert_eq!(m.things, things);
    assert_eq!(m.offset, offset);
}

#[test]
fn drag_clamps_huge_vectors() {
    let things = vec![thing(0, 0.5, 0.5, true), thing(1, 0.1, 0.9, true)];
    let g = gesturing(Rect::new(0.5, 0.5, 0.0, 0.0), Rect::new(0.9, 0.1, 0.0, 0.0));
    for lead in [Point::new(50.0, -50.0), Point::new(-1e9, 1e9)] {
        let m = advance(&things, &g, Point::ZERO, Some(lead), &tuning(MotionModel::Drift));
        for t in &m.things {
            assert!((0.0..=1.0).contains(&t.x));
            assert!((0.0..=1.0).contains(&t.y));
        }
    }
}

// =============================================================
// Gesturing: attract
// =============================================================

#[test]
fn pinch_pulls_selected_toward_center() {
    let start = Rect::new(0.3, 0.3, 0.4, 0.4);
    let pinched = Rect::new(0.4, 0.4, 0.2, 0.2);
    let g = gesturing(start, pinched);
    let things = vec![thing(0, 0.3, 0.5, true), thing(1, 0.9, 0.9, false)];
    let m = advance(&things, &g, Point::ZERO, None, &tuning(MotionModel::Attract));
    let center = pinched.center();
    assert!(m.things[0].position().distance(center) < things[0].position().distance(center));
    assert_eq!(m.things[1], things[1]);
}

#[test]
fn spread_pushes_selected_away_from_center() {
    let start = Rect::new(0.4, 0.4, 0.2, 0.2);
    let spread = Rect::new(0.3, 0.3, 0.4, 0.4);
    let g = gesturing(start, spread);
    let things = vec![thing(0, 0.45, 0.5, true)];
    let m = advance(&things, &g, Point::ZERO, None, &tuning(MotionModel::Attract));
    let center = spread.center();
    assert!(m.things[0].position().distance(center) > things[0].position().distance(center));
}

#[test]
fn attract_step_matches_growth_multiplier() {
    let start = Rect::new(0.0, 0.0, 0.6, 0.8);
    let current = Rect::new(0.5, 0.5, 0.0, 0.0);
    let g = gesturing(start, current);
    let things = vec![thing(0, 0.1, 0.5, true)];
    let t = tuning(MotionModel::Attract);
    let k = growth_multiplier(&start, &current, t.max_growth);
    let m = advance(&things, &g, Point::ZERO, None, &t);
    assert!(approx_eq(m.things[0].x, 0.1 + (0.5 - 0.1) * k));
    assert!(approx_eq(m.things[0].y, 0.5));
}

#[test]
fn attract_offset_is_damped_rect_displacement() {
    let start = Rect::new(0.2, 0.2, 0.1, 0.1);
    let moved = Rect::new(0.3, 0.1, 0.1, 0.1);
    let g = gesturing(start, moved);
    let t = tuning(MotionModel::Attract);
    let m = advance(&[], &g, Point::ZERO, None, &t);
    assert!(approx_eq(m.offset.x, 0.1 * t.gesture_damping));
    assert!(approx_eq(m.offset.y, -0.1 * t.gesture_damping));
}

#[test]
fn attract_clamps_to_stage() {
    let start = Rect::new(0.0, 0.0, 1.0, 1.0);
    let spread_past = Rect::new(-5.0, -5.0, 11.0, 11.0);
    let g = gesturing(start, spread_past);
    let t = MotionTuning {
        max_growth: 1e6,
        ..tuning(MotionModel::Attract)
    };
    let things = vec![thing(0, 0.01, 0.99, true)];
    let m = advance(&things, &g, Point::ZERO, None, &t);
    assert!((0.0..=1.0).contains(&m.things[0].x));
    assert!((0.0..=1.0).contains(&m.things[0].y));
}
