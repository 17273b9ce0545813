use crate::{Camera, CameraError};
use redzone_base::Tensor;

const BACKGROUND: [u8; 3] = [40, 40, 40];
// Lands inside the monitor's default skin threshold (H 10, S 153, V 200)
const BLOCK_COLOR: [u8; 3] = [200, 120, 80];

/// Synthetic frame source.
///
/// Generates frames with a flat background and a skin-colored square
/// sweeping horizontally, so the monitor can run and demo every safety
/// state without a camera. An optional frame budget makes the source
/// exhaust itself, which exercises clean shutdown.
#[derive(Debug, Clone)]
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    block: u32,
    step: u32,
    frame_index: u64,
    budget: Option<u64>,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            block: 120,
            step: 4,
            frame_index: 0,
            budget: None,
        }
    }

    /// Stop after `frames` frames; `recv` then returns `Ok(None)`.
    pub fn with_budget(mut self, frames: u64) -> Self {
        self.budget = Some(frames);
        self
    }

    /// Set the edge length of the sweeping square.
    pub fn with_block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }

    fn render(&self, index: u64) -> Tensor<u8> {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut data = Vec::with_capacity(w * h * 3);
        for _ in 0..w * h {
            data.extend_from_slice(&BACKGROUND);
        }

        let block = self.block.min(self.width).min(self.height) as usize;
        let travel = (w - block).max(1) as u64;
        let x0 = ((index * self.step as u64) % travel) as usize;
        let y0 = (h - block) / 2;

        for y in y0..y0 + block {
            let row = (y * w + x0) * 3;
            for px in data[row..row + block * 3].chunks_exact_mut(3) {
                px.copy_from_slice(&BLOCK_COLOR);
            }
        }

        Tensor {
            shape: vec![h, w, 3],
            data,
        }
    }
}

impl Camera for SyntheticCamera {
    async fn recv(&mut self) -> Result<Option<Tensor<u8>>, CameraError> {
        if let Some(budget) = self.budget {
            if self.frame_index >= budget {
                return Ok(None);
            }
        }

        let frame = self.render(self.frame_index);
        self.frame_index += 1;
        Ok(Some(frame))
    }
}
