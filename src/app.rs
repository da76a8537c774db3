use crate::camera::{CameraDevice, CameraSession};
use crate::config::Config;
use crate::error::AppError;
use crate::image_pipeline::FramePipeline;
use crate::message::Message;
use crate::model::advice::{simulated_answer, AdviceState, ADVICE_DELAY};
use crate::model::media::SUPPORTED_EXTENSIONS;
use crate::model::{load_image, Effect, Event, Session, View};
use crate::service::{GeminiClient, SkinAnalyzer};
use crate::views::{
    analysis_view, header, loading_screen, login_screen, main_screen, with_upgrade_modal,
    LOADING_MESSAGE_INTERVAL,
};
use iced::widget::column;
use iced::widget::image::Handle;
use iced::{application, time, Element, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::mem;
use std::sync::Arc;
use std::time::Duration;

const APP_TITLE: &str = "DermaIA";
const CAMERA_PREVIEW_INTERVAL: Duration = Duration::from_millis(100);

pub fn run() -> Result<(), AppError> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = Config::from_env().inspect_err(|err| log::error!("{err}"))?;
    let analyzer: Arc<dyn SkinAnalyzer> = Arc::new(GeminiClient::new(&config)?);
    log::info!("Analysis service: model {} at {}", config.model, config.base_url);

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .run_with(move || (App::new(analyzer, detect_camera()), Task::none()))?;

    Ok(())
}

#[cfg(feature = "native-camera")]
fn detect_camera() -> Option<Arc<dyn CameraDevice>> {
    crate::camera::native::NativeCamera::detect()
        .map(|camera| Arc::new(camera) as Arc<dyn CameraDevice>)
}

#[cfg(not(feature = "native-camera"))]
fn detect_camera() -> Option<Arc<dyn CameraDevice>> {
    log::info!("Built without the native-camera feature; capture is disabled");
    None
}

pub struct App {
    session: Session,
    analyzer: Arc<dyn SkinAnalyzer>,
    camera_device: Option<Arc<dyn CameraDevice>>,
    camera: Option<CameraSession>,
    camera_preview: Option<Handle>,
    spinner_step: usize,
    advice: AdviceState,
    /// Bumped on logout so pending advice answers are discarded.
    advice_epoch: u64,
}

impl App {
    pub fn new(
        analyzer: Arc<dyn SkinAnalyzer>,
        camera_device: Option<Arc<dyn CameraDevice>>,
    ) -> Self {
        Self {
            session: Session::default(),
            analyzer,
            camera_device,
            camera: None,
            camera_preview: None,
            spinner_step: 0,
            advice: AdviceState::default(),
            advice_epoch: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Session(event) => self.dispatch(event),
            Message::PickImage => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("Imagen", &SUPPORTED_EXTENSIONS)
                        .pick_file()
                        .await
                        .map(|handle| load_image(handle.path().to_path_buf()))
                },
                Message::ImageLoaded,
            ),
            Message::ImageLoaded(None) => Task::none(),
            Message::ImageLoaded(Some(Ok(image))) => self.dispatch(Event::ImageSelected(image)),
            Message::ImageLoaded(Some(Err(message))) => {
                self.dispatch(Event::ImageRejected(message))
            }
            Message::CaptureFrame => self.capture_frame(),
            Message::CameraTick => {
                self.refresh_preview();
                Task::none()
            }
            Message::SpinnerTick => {
                if self.session.is_loading() {
                    self.spinner_step = self.spinner_step.wrapping_add(1);
                }
                Task::none()
            }
            Message::AdviceQuestionChanged(question) => {
                if !self.advice.pending {
                    self.advice.question = question;
                }
                Task::none()
            }
            Message::AskAdvice => match self.advice.ask() {
                Some(question) => {
                    let epoch = self.advice_epoch;
                    Task::perform(
                        async move {
                            tokio::time::sleep(ADVICE_DELAY).await;
                            simulated_answer(&question)
                        },
                        move |answer| Message::AdviceReady { epoch, answer },
                    )
                }
                None => Task::none(),
            },
            Message::AdviceReady { epoch, answer } => {
                if epoch == self.advice_epoch {
                    self.advice.answered(answer);
                } else {
                    log::debug!("Dropping advice answer from a previous session");
                }
                Task::none()
            }
        };

        self.sync_camera();
        task
    }

    fn dispatch(&mut self, event: Event) -> Task<Message> {
        if matches!(event, Event::Logout) {
            self.advice = AdviceState::default();
            self.advice_epoch += 1;
        }

        let (session, effect) = mem::take(&mut self.session).apply(event);
        self.session = session;

        match effect {
            Effect::None => Task::none(),
            Effect::Analyze { id, request } => {
                self.spinner_step = 0;
                log::debug!("Analysis {id:?} dispatched");
                let analyzer = Arc::clone(&self.analyzer);
                Task::perform(async move { analyzer.analyze(request).await }, move |result| {
                    Event::AnalysisSettled { id, result }.into()
                })
            }
        }
    }

    fn capture_frame(&mut self) -> Task<Message> {
        let Some(camera) = self.camera.as_mut() else {
            log::warn!("Capture requested without an active camera");
            return Task::none();
        };

        let captured = camera
            .capture()
            .map_err(|err| err.to_string())
            .and_then(FramePipeline::encode_jpeg);

        match captured {
            Ok(image) => self.dispatch(Event::ImageSelected(image)),
            Err(message) => {
                log::error!("Camera capture failed: {message}");
                self.dispatch(Event::CameraFailed(message))
            }
        }
    }

    fn refresh_preview(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        match camera.capture() {
            Ok(frame) => {
                self.camera_preview =
                    Some(Handle::from_rgba(frame.width, frame.height, frame.rgba));
            }
            Err(err) => log::warn!("Dropped preview frame: {err}"),
        }
    }

    /// Opens, swaps or releases the camera stream so it matches what the
    /// current view asks for.
    fn sync_camera(&mut self) {
        let wanted = self.session.wanted_camera();
        if self.camera.as_ref().map(CameraSession::facing) == wanted {
            return;
        }

        self.camera = None;
        self.camera_preview = None;
        let Some(facing) = wanted else {
            return;
        };

        match CameraSession::acquire(self.camera_device.as_ref(), facing) {
            Ok(camera) => self.camera = Some(camera),
            Err(err) => {
                log::warn!("Camera unavailable: {err}");
                let (session, _) = mem::take(&mut self.session)
                    .apply(Event::CameraFailed(err.to_string()));
                self.session = session;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = match &self.session.view {
            View::Login => login_screen(),
            View::Main(draft) => main_screen(draft, self.camera_preview.as_ref()),
            View::Loading { .. } => loading_screen(self.spinner_step),
            View::Analysis(report) => analysis_view(report, &self.session, &self.advice),
        };

        let page: Element<'_, Message> = match self.session.user {
            Some(user) => column![header(user), content].spacing(8).into(),
            None => content,
        };

        if self.session.upgrade_modal_open {
            with_upgrade_modal(page)
        } else {
            page
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let spinner = if self.session.is_loading() {
            time::every(LOADING_MESSAGE_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        };

        let preview = if self.camera.is_some() {
            time::every(CAMERA_PREVIEW_INTERVAL).map(|_| Message::CameraTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([spinner, preview])
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}
