//! Frame overlay drawing for the monitor window.
//!
//! Everything visual lives here: the zone outline in the state theme color,
//! the hull outline, the interaction line and markers when the hand is
//! close, and the full-frame alarm border on danger.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as PixelRect;
use redzone_base::{Rect, Vec2};
use redzone_vision::{Hull, ProximityReport, SafetyState};

const SAFE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const WARNING_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
const DANGER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const HULL_COLOR: Rgb<u8> = Rgb([0, 255, 255]);
const LINK_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

const ZONE_OUTLINE_PX: i32 = 3;
const ALARM_BORDER_PX: i32 = 15;
const HAND_MARKER_RADIUS: i32 = 8;
const ZONE_MARKER_RADIUS: i32 = 5;

/// Theme color for a safety state: green / yellow / red.
pub fn state_color(state: SafetyState) -> Rgb<u8> {
    match state {
        SafetyState::Safe => SAFE_COLOR,
        SafetyState::Warning => WARNING_COLOR,
        SafetyState::Danger => DANGER_COLOR,
    }
}

/// Draws the full overlay for one frame.
pub fn draw_overlays(
    frame: &mut RgbImage,
    zone: Rect<i32>,
    hull: Option<&Hull>,
    report: &ProximityReport,
) {
    draw_thick_rect(frame, zone, ZONE_OUTLINE_PX, state_color(report.state));

    if let Some(hull) = hull {
        draw_hull(frame, hull);
        if report.state != SafetyState::Safe {
            draw_link(frame, report);
        }
    }

    if report.state == SafetyState::Danger {
        let full = Rect::new(
            Vec2::zero(),
            Vec2::new(frame.width() as i32, frame.height() as i32),
        );
        draw_thick_rect(frame, full, ALARM_BORDER_PX, DANGER_COLOR);
    }
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb.
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    let expected = width * height * 3;
    assert!(
        buf.len() >= expected,
        "RGB buffer too small: expected {} bytes, got {}",
        expected,
        buf.len()
    );

    buf[..expected]
        .chunks_exact(3)
        .map(|px| {
            let [r, g, b] = [px[0] as u32, px[1] as u32, px[2] as u32];
            (r << 16) | (g << 8) | b
        })
        .collect()
}

/// Rectangle outline of the given thickness, growing inward.
fn draw_thick_rect(frame: &mut RgbImage, rect: Rect<i32>, thickness: i32, color: Rgb<u8>) {
    for t in 0..thickness {
        let w = rect.size.x - 2 * t;
        let h = rect.size.y - 2 * t;
        if w <= 0 || h <= 0 {
            break;
        }
        draw_hollow_rect_mut(
            frame,
            PixelRect::at(rect.origin.x + t, rect.origin.y + t).of_size(w as u32, h as u32),
            color,
        );
    }
}

fn draw_hull(frame: &mut RgbImage, hull: &Hull) {
    let n = hull.points.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        let a = hull.points[i];
        let b = hull.points[(i + 1) % n];
        draw_line_segment_mut(
            frame,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            HULL_COLOR,
        );
    }
}

fn draw_link(frame: &mut RgbImage, report: &ProximityReport) {
    let (hp, zp) = (report.hand_point, report.zone_point);
    draw_line_segment_mut(
        frame,
        (hp.x as f32, hp.y as f32),
        (zp.x as f32, zp.y as f32),
        LINK_COLOR,
    );
    draw_filled_circle_mut(frame, (hp.x, hp.y), HAND_MARKER_RADIUS, DANGER_COLOR);
    draw_filled_circle_mut(frame, (zp.x, zp.y), ZONE_MARKER_RADIUS, LINK_COLOR);
}
