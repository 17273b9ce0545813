//! Frame sources for the redzone monitor.
//!
//! This crate provides a unified `Camera` trait for async frame capture,
//! a V4L2 webcam backend (feature `v4l2`), and a synthetic generator for
//! hardware-free runs. Sources yield RGB frames and signal exhaustion with
//! `Ok(None)` — running out of frames is normal termination, not an error.

pub mod config;
pub mod convert;
pub mod error;
pub mod synthetic;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use synthetic::SyntheticCamera;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
