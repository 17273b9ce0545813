use image::RgbImage;
use minifb::{Key, Window, WindowOptions};
use redzone_base::log;
use redzone_base::{Rect, Tensor, Vec2};
use redzone_camera::{Camera, CameraConfig, SyntheticCamera, V4l2Camera};
use redzone_vision::{classify, HandSegmenter, SafetyState};
use zone_monitor::overlay;

const ZONE_SIZE: i32 = 200;
const QUIT_KEYS: [Key; 2] = [Key::Q, Key::Escape];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    redzone_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--synthetic") {
        let mut camera = SyntheticCamera::new(640, 480);
        if let Some(frames) = args.get(1) {
            camera = camera.with_budget(frames.parse()?);
        }
        log::info!("Synthetic source: 640x480");
        run(camera).await
    } else {
        let device = args
            .first()
            .cloned()
            .unwrap_or_else(|| "/dev/video0".to_string());
        let config = CameraConfig::default().with_device(device.clone());
        let camera = V4l2Camera::new(config)?;
        log::info!("Camera opened: {}", device);
        run(camera).await
    }
}

async fn run<C: Camera>(mut camera: C) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("System armed, tracking starts immediately. Q or ESC quits.");

    // First frame decides the window size
    let Some(first) = camera.recv().await? else {
        log::info!("Frame source empty, nothing to monitor");
        return Ok(());
    };
    let Some((height, width, 3)) = first.hwc() else {
        return Err(format!("expected [H, W, 3] first frame, got {:?}", first.shape).into());
    };

    let mut window = Window::new(
        "Hand Safety Monitor [SAFE] - Q/ESC quits",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);

    let segmenter = HandSegmenter::default();
    let mut zone: Option<Rect<i32>> = None;
    let mut last_state: Option<SafetyState> = None;
    let mut pending = Some(first);

    // Quit keys are checked between frames; the current frame always
    // finishes before the loop exits
    while window.is_open() && !QUIT_KEYS.iter().any(|&k| window.is_key_down(k)) {
        let tensor = match pending.take() {
            Some(tensor) => tensor,
            None => match camera.recv().await? {
                Some(tensor) => tensor,
                None => break,
            },
        };

        let Some(mut frame) = frame_to_rgb(tensor) else {
            continue;
        };
        if (frame.width() as usize, frame.height() as usize) != (width, height) {
            log::warn!(
                "frame dimension mismatch: expected {}x{}, got {}x{}",
                width,
                height,
                frame.width(),
                frame.height()
            );
            continue;
        }

        // Mirror for the usual selfie view
        image::imageops::flip_horizontal_in_place(&mut frame);

        // Fixed once from the first frame's dimensions, never recalculated
        let zone = *zone.get_or_insert_with(|| danger_zone(width as i32, height as i32));

        let hull = segmenter.segment(&frame);
        let report = classify(hull.as_ref(), zone);

        overlay::draw_overlays(&mut frame, zone, hull.as_ref(), &report);

        if last_state != Some(report.state) {
            log_state(report.state, report.distance);
            window.set_title(&format!(
                "Hand Safety Monitor [{}] - Q/ESC quits",
                report.state.label()
            ));
            last_state = Some(report.state);
        }

        let argb = overlay::rgb_to_argb(frame.as_raw(), width, height);
        window.update_with_buffer(&argb, width, height)?;
    }

    log::info!("Exiting...");
    Ok(())
}

/// Danger zone: fixed 200x200 square toward the upper right of the view.
fn danger_zone(width: i32, height: i32) -> Rect<i32> {
    let origin = Vec2::new(
        (width as f64 * 0.65) as i32,
        (height as f64 * 0.25) as i32,
    );
    Rect::new(origin, Vec2::new(ZONE_SIZE, ZONE_SIZE))
}

fn frame_to_rgb(tensor: Tensor<u8>) -> Option<RgbImage> {
    match tensor.hwc() {
        Some((h, w, 3)) => RgbImage::from_raw(w as u32, h as u32, tensor.data),
        _ => {
            log::warn!("expected [H, W, 3] frame shape, got {:?}", tensor.shape);
            None
        }
    }
}

fn log_state(state: SafetyState, distance: f64) {
    match state {
        SafetyState::Safe => log::info!("STATE: SAFE"),
        SafetyState::Warning => {
            log::warn!("WARNING: hand approaching danger zone ({distance:.0}px)")
        }
        SafetyState::Danger => log::error!("DANGER: hand in contact range ({distance:.0}px)"),
    }
}
