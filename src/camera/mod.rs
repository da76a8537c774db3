//! Camera capture collaborator.
//!
//! The device stream is owned by a [`CameraSession`]; dropping the session
//! stops the stream, so every path out of the camera view releases it.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

#[cfg(feature = "native-camera")]
pub mod native;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Environment,
    User,
}

impl Facing {
    pub fn toggled(self) -> Self {
        match self {
            Facing::Environment => Facing::User,
            Facing::User => Facing::Environment,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Facing::Environment => "trasera",
            Facing::User => "frontal",
        }
    }
}

/// One RGBA frame, row-major, four bytes per pixel.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Este equipo no tiene una cámara disponible.")]
    NoDevice,

    #[error("No se pudo acceder a la cámara {}. Por favor, verifica los permisos.", .0.describe())]
    Unavailable(Facing),

    #[error("No se pudo capturar la imagen: {0}")]
    Capture(String),
}

pub trait CameraStream: Send {
    fn grab(&mut self) -> Result<Frame, CameraError>;
    fn stop(&mut self);
}

pub trait CameraDevice: Send + Sync {
    fn open(&self, facing: Facing) -> Result<Box<dyn CameraStream>, CameraError>;
}

pub struct CameraSession {
    facing: Facing,
    stream: Option<Box<dyn CameraStream>>,
}

impl CameraSession {
    pub fn acquire(
        device: Option<&Arc<dyn CameraDevice>>,
        facing: Facing,
    ) -> Result<Self, CameraError> {
        let device = device.ok_or(CameraError::NoDevice)?;
        let stream = device.open(facing)?;
        log::info!("Camera acquired ({facing:?})");
        Ok(Self {
            facing,
            stream: Some(stream),
        })
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn capture(&mut self) -> Result<Frame, CameraError> {
        match self.stream.as_mut() {
            Some(stream) => stream.grab(),
            None => Err(CameraError::Capture("stream already stopped".to_string())),
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            log::info!("Camera released ({:?})", self.facing);
        }
    }
}

impl fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraSession")
            .field("facing", &self.facing)
            .field("active", &self.stream.is_some())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeCamera;
    use super::*;

    #[test]
    fn dropping_session_stops_stream() {
        let camera = Arc::new(FakeCamera::default());
        let device: Arc<dyn CameraDevice> = camera.clone();

        let mut session = CameraSession::acquire(Some(&device), Facing::User).expect("opens");
        assert_eq!(camera.active(), 1);
        assert_eq!(session.capture().map(|frame| frame.width).ok(), Some(2));

        drop(session);
        assert_eq!(camera.active(), 0);
    }

    #[test]
    fn missing_device_reports_no_camera() {
        let err = CameraSession::acquire(None, Facing::Environment).expect_err("no device");
        assert_eq!(err, CameraError::NoDevice);
    }

    #[test]
    fn unavailable_message_names_the_facing() {
        let message = CameraError::Unavailable(Facing::Environment).to_string();
        assert!(message.contains("trasera"));
        let message = CameraError::Unavailable(Facing::User).to_string();
        assert!(message.contains("frontal"));
    }

    #[test]
    fn toggled_switches_facing() {
        assert_eq!(Facing::Environment.toggled(), Facing::User);
        assert_eq!(Facing::User.toggled(), Facing::Environment);
    }
}
