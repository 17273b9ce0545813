//! Frame decoding for the redzone monitor.
//!
//! Wraps the `image` crate to decode compressed camera frames (MJPEG from
//! the webcam, PNG/JPEG elsewhere) into RGB8 tensors in HWC layout
//! `[height, width, 3]`.

pub mod error;

pub use error::ImageError;

use redzone_base::Tensor;

/// Decodes a compressed image into an RGB8 tensor.
///
/// The image format is auto-detected by the `image` crate. Inputs that are
/// not already RGB8 (greyscale, RGBA, 16-bit) are converted.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is
/// unsupported. Returns `ImageError::Tensor` if tensor construction fails.
pub fn decode_rgb8(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let rgb = image::load_from_memory(data)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let shape = vec![height as usize, width as usize, 3];
    Ok(Tensor::new(shape, rgb.into_raw())?)
}
