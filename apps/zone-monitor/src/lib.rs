//! Shared pieces of the zone-monitor binary, split out so the overlay
//! renderer is testable without a window.

pub mod overlay;
