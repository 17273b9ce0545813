use crate::{convert, Camera, CameraConfig, CameraError};
use redzone_base::Tensor;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

/// Pixel layout the device agreed to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PixelFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 camera implementation.
///
/// Negotiates MJPEG at the requested resolution, falling back to YUYV when
/// the device refuses MJPEG. Capture runs on a background thread feeding a
/// bounded channel; `recv` yields decoded RGB frames.
pub struct V4l2Camera {
    config: CameraConfig,
    device: Option<Device>,
    format: PixelFormat,
    width: u32,
    height: u32,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Option<Tensor<u8>>, CameraError> {
        // Ensure capture thread is running
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("Receiver not initialized".to_string()))?;

        // Channel closed means the capture thread exited: no more frames.
        match receiver.recv().await {
            Some(Ok(frame)) => Ok(Some(frame)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Drop the receiver to signal the thread to stop
        drop(self.receiver.take());

        // Wait for the thread to finish
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Create a new V4L2 camera with the given configuration.
    ///
    /// Opens the device at `config.device()` and asks for MJPEG at the
    /// requested resolution. Devices that cannot do MJPEG are accepted at
    /// YUYV instead; anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, agrees
    /// to neither MJPEG nor YUYV, or parameter setting fails.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())
            .map_err(|e| CameraError::Device(format!("{}: {e}", config.device())))?;

        let requested = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let accepted = Capture::set_format(&device, &requested)
            .map_err(|e| CameraError::Device(format!("set_format failed: {e}")))?;

        let format = match &accepted.fourcc.repr {
            b"MJPG" => PixelFormat::Mjpeg,
            b"YUYV" => PixelFormat::Yuyv,
            other => {
                return Err(CameraError::Device(format!(
                    "unsupported pixel format {}",
                    String::from_utf8_lossy(other)
                )));
            }
        };
        log::debug!(
            "negotiated {:?} at {}x{}",
            format,
            accepted.width,
            accepted.height
        );

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)
            .map_err(|e| CameraError::Device(format!("set_params failed: {e}")))?;

        Ok(Self {
            config,
            device: Some(device),
            format,
            width: accepted.width,
            height: accepted.height,
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    ///
    /// This is called automatically on the first `recv()` call.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        // Take ownership of the device
        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("Device already consumed".to_string()))?;

        let buffer_count = self.config.buffer_count() as usize;
        let (tx, rx) = mpsc::channel(buffer_count);

        let format = self.format;
        let (width, height) = (self.width, self.height);
        let handle = thread::spawn(move || {
            Self::capture_loop(device, format, width, height, tx, buffer_count);
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop.
    ///
    /// Reads frames from V4L2, decodes them to RGB tensors, and sends them
    /// through the channel until the receiver goes away or the stream faults.
    fn capture_loop(
        device: Device,
        format: PixelFormat,
        width: u32,
        height: u32,
        tx: mpsc::Sender<FrameResult>,
        buffer_count: usize,
    ) {
        let mut stream = match MmapStream::with_buffers(&device, Type::VideoCapture, buffer_count as u32)
        {
            Ok(stream) => stream,
            Err(err) => {
                let _ = tx.blocking_send(Err(err.into()));
                return;
            }
        };

        loop {
            let result = Self::next_frame(&mut stream, format, width, height);
            let faulted = result.is_err();

            // Send frame through channel (blocking if full)
            if tx.blocking_send(result).is_err() {
                // Receiver dropped - exit thread
                break;
            }
            if faulted {
                break;
            }
        }
    }

    fn next_frame(
        stream: &mut MmapStream<'_>,
        format: PixelFormat,
        width: u32,
        height: u32,
    ) -> FrameResult {
        let (data, _metadata) = CaptureStream::next(stream)?;

        match format {
            PixelFormat::Mjpeg => Ok(redzone_image::decode_rgb8(data)?),
            PixelFormat::Yuyv => {
                let rgb = convert::yuyv_to_rgb(data, width, height).ok_or_else(|| {
                    CameraError::Capture(format!("short YUYV frame: {} bytes", data.len()))
                })?;
                Ok(Tensor::new(
                    vec![height as usize, width as usize, 3],
                    rgb,
                )?)
            }
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}
