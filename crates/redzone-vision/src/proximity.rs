use redzone_base::{Rect, Vec2};

use crate::segment::Hull;

/// Distances at or below this are contact range.
pub const DANGER_RADIUS_PX: f64 = 10.0;
/// Distances below this (and above contact range) are approach range.
pub const WARNING_RADIUS_PX: f64 = 150.0;

/// Per-frame safety classification. Derived purely from the current frame;
/// no hysteresis, no memory of prior frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyState {
    Safe,
    Warning,
    Danger,
}

impl SafetyState {
    pub fn label(self) -> &'static str {
        match self {
            SafetyState::Safe => "SAFE",
            SafetyState::Warning => "WARNING",
            SafetyState::Danger => "DANGER",
        }
    }
}

/// Outcome of scanning a hull against the danger zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityReport {
    pub state: SafetyState,
    /// Minimum hull-to-zone distance in pixels. 0.0 when no hand is
    /// tracked — indistinguishable on purpose from a true contact reading;
    /// callers that care hold the `Option<Hull>` itself.
    pub distance: f64,
    /// Hull point achieving the minimum distance.
    pub hand_point: Vec2<i32>,
    /// Nearest zone point to `hand_point`.
    pub zone_point: Vec2<i32>,
}

impl ProximityReport {
    /// Report used when no hand is tracked this frame.
    fn no_hand() -> Self {
        Self {
            state: SafetyState::Safe,
            distance: 0.0,
            hand_point: Vec2::zero(),
            zone_point: Vec2::zero(),
        }
    }
}

/// Bucket a hull-to-zone distance into a safety state.
///
/// The contact bound is inclusive (exactly 10 px is Danger); the safe bound
/// is exclusive (exactly 150 px is Safe).
pub fn state_for_distance(distance: f64) -> SafetyState {
    if distance <= DANGER_RADIUS_PX {
        SafetyState::Danger
    } else if distance < WARNING_RADIUS_PX {
        SafetyState::Warning
    } else {
        SafetyState::Safe
    }
}

/// Scans every hull point against the zone rectangle and reports the
/// closest approach.
///
/// For each point the nearest rectangle point is the component-wise clamp
/// of the point to the rectangle; the global minimum over all points drives
/// the state. The first point achieving the minimum wins ties, so the
/// reported pair is stable in hull order. Pure function: no state between
/// calls, no side effects.
pub fn classify(hull: Option<&Hull>, zone: Rect<i32>) -> ProximityReport {
    let Some(hull) = hull else {
        return ProximityReport::no_hand();
    };

    let mut best: Option<(f64, Vec2<i32>, Vec2<i32>)> = None;
    for &point in &hull.points {
        let nearest = zone.clamp_point(point);
        let distance = point.distance_to(nearest);

        let closer = match best {
            Some((min, _, _)) => distance < min,
            None => true,
        };
        if closer {
            best = Some((distance, point, nearest));
        }
    }

    match best {
        Some((distance, hand_point, zone_point)) => ProximityReport {
            state: state_for_distance(distance),
            distance,
            hand_point,
            zone_point,
        },
        // Empty hulls cannot come out of the segmenter; degrade to the
        // no-hand sentinel rather than panic
        None => ProximityReport::no_hand(),
    }
}
