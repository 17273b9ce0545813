use std::fmt;

use redzone_base::TensorError;
use redzone_image::ImageError;

#[derive(Debug)]
pub enum CameraError {
    /// Device could not be opened or configured.
    Device(String),
    /// Capture stream fault while the device was running.
    Capture(String),
    /// A captured frame could not be decoded.
    Decode(ImageError),
    /// The channel between the capture thread and the consumer broke.
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Capture(msg) => write!(f, "capture error: {msg}"),
            CameraError::Decode(err) => write!(f, "frame decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<ImageError> for CameraError {
    fn from(err: ImageError) -> Self {
        CameraError::Decode(err)
    }
}

impl From<TensorError> for CameraError {
    fn from(err: TensorError) -> Self {
        CameraError::Decode(ImageError::Tensor(err))
    }
}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Capture(err.to_string())
    }
}
