pub mod advice;
pub mod analysis;
pub mod media;
pub mod session;

pub use analysis::{
    AnalysisCondition, AnalysisHistory, AnalysisReply, AnalysisResult, FailureKind, Probability,
    Report, SERVICE_UNAVAILABLE_MESSAGE,
};
pub use media::{load_image, AnalysisRequest, ImagePayload};
pub use session::{CaptureMode, Draft, Effect, Event, Notice, RequestId, Session, User, View};
