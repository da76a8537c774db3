use crate::model::{Event, ImagePayload};

#[derive(Debug, Clone)]
pub enum Message {
    Session(Event),
    PickImage,
    ImageLoaded(Option<Result<ImagePayload, String>>),
    CaptureFrame,
    CameraTick,
    SpinnerTick,
    AdviceQuestionChanged(String),
    AskAdvice,
    AdviceReady { epoch: u64, answer: String },
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Session(event)
    }
}
