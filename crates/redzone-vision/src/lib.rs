//! Hand detection and danger-zone proximity for the redzone monitor.
//!
//! `segment` reduces a frame to at most one convex hull outlining the
//! largest skin-colored region; `proximity` scans that hull against the
//! danger-zone rectangle and buckets the minimum distance into a safety
//! state. Both stages are per-frame and stateless.

pub mod hsv;
pub mod proximity;
pub mod segment;

pub use proximity::{
    classify, state_for_distance, ProximityReport, SafetyState, DANGER_RADIUS_PX,
    WARNING_RADIUS_PX,
};
pub use segment::{HandSegmenter, Hull, SkinRange};
