//! Webcam backend built on nokhwa.
//!
//! The nokhwa handle is not `Send` on every platform, so each open stream
//! owns a worker thread that holds the device and answers grab requests.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use nokhwa::pixel_format::RgbAFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, CameraInfo, RequestedFormat, RequestedFormatType};
use nokhwa::{query, Camera};

use super::{CameraDevice, CameraError, CameraStream, Facing, Frame};

#[derive(Debug, Default)]
pub struct NativeCamera;

impl NativeCamera {
    /// Returns a device only when the platform reports at least one camera.
    pub fn detect() -> Option<Self> {
        match query(ApiBackend::Auto) {
            Ok(devices) if !devices.is_empty() => {
                log::info!("Found {} camera(s)", devices.len());
                Some(Self)
            }
            Ok(_) => {
                log::info!("No camera detected");
                None
            }
            Err(err) => {
                log::warn!("Camera discovery failed: {err}");
                None
            }
        }
    }
}

/// Desktop webcams face the user; a second device, when present, stands in
/// for the rear camera.
fn index_for(devices: &[CameraInfo], facing: Facing) -> Option<CameraIndex> {
    let info = match facing {
        Facing::User => devices.first(),
        Facing::Environment => devices.get(1).or_else(|| devices.first()),
    }?;
    Some(info.index().clone())
}

impl CameraDevice for NativeCamera {
    fn open(&self, facing: Facing) -> Result<Box<dyn CameraStream>, CameraError> {
        let devices = query(ApiBackend::Auto).map_err(|err| {
            log::warn!("Camera discovery failed: {err}");
            CameraError::NoDevice
        })?;
        let index = index_for(&devices, facing).ok_or(CameraError::NoDevice)?;

        let (command_tx, command_rx) = mpsc::channel();
        let (frame_tx, frame_rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("camera".to_string())
            .spawn(move || run_worker(index, facing, ready_tx, command_rx, frame_tx))
            .map_err(|err| CameraError::Capture(err.to_string()))?;

        let opened = ready_rx
            .recv()
            .unwrap_or(Err(CameraError::Unavailable(facing)));
        if let Err(err) = opened {
            let _ = worker.join();
            return Err(err);
        }

        Ok(Box::new(NativeStream {
            commands: command_tx,
            frames: frame_rx,
            worker: Some(worker),
        }))
    }
}

enum Command {
    Grab,
    Stop,
}

struct NativeStream {
    commands: Sender<Command>,
    frames: Receiver<Result<Frame, CameraError>>,
    worker: Option<JoinHandle<()>>,
}

impl CameraStream for NativeStream {
    fn grab(&mut self) -> Result<Frame, CameraError> {
        let closed = || CameraError::Capture("camera worker stopped".to_string());
        self.commands.send(Command::Grab).map_err(|_| closed())?;
        self.frames.recv().map_err(|_| closed())?
    }

    fn stop(&mut self) {
        let _ = self.commands.send(Command::Stop);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Camera worker panicked while stopping");
            }
        }
    }
}

fn run_worker(
    index: CameraIndex,
    facing: Facing,
    ready: Sender<Result<(), CameraError>>,
    commands: Receiver<Command>,
    frames: Sender<Result<Frame, CameraError>>,
) {
    let format = RequestedFormat::new::<RgbAFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
    let opened = Camera::new(index, format).and_then(|mut camera| {
        camera.open_stream()?;
        Ok(camera)
    });

    let mut camera = match opened {
        Ok(camera) => camera,
        Err(err) => {
            log::warn!("Failed to open {facing:?} camera: {err}");
            let _ = ready.send(Err(CameraError::Unavailable(facing)));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    while let Ok(Command::Grab) = commands.recv() {
        let frame = camera
            .frame()
            .and_then(|buffer| buffer.decode_image::<RgbAFormat>())
            .map(|image| Frame {
                width: image.width(),
                height: image.height(),
                rgba: image.into_raw(),
            })
            .map_err(|err| CameraError::Capture(err.to_string()));

        if frames.send(frame).is_err() {
            break;
        }
    }

    if let Err(err) = camera.stop_stream() {
        log::warn!("Failed to stop camera stream: {err}");
    }
}
