use crate::CameraError;
use redzone_base::Tensor;

/// Async camera trait for frame capture.
///
/// Implementations provide a `recv` method that asynchronously returns
/// decoded RGB frames as `Tensor<u8>` in HWC layout `[height, width, 3]`.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame from the source.
    ///
    /// Returns `Ok(Some(frame))` with shape `[height, width, 3]`,
    /// `Ok(None)` once the source has no more frames (normal termination),
    /// or an error for device and decode faults.
    async fn recv(&mut self) -> Result<Option<Tensor<u8>>, CameraError>;
}
