//! Session state and its transition function.
//!
//! `Session::apply` is pure: it consumes the current state and an event and
//! returns the next state plus, at most, one effect for the caller to run.
//! The analysis call itself happens outside and comes back as
//! [`Event::AnalysisSettled`].

use super::analysis::{AnalysisHistory, AnalysisResult, FailureKind, Report};
use super::media::{AnalysisRequest, ImagePayload};
use crate::camera::Facing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct User {
    pub is_premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    fn from_failure(kind: FailureKind, message: String) -> Self {
        let title = match kind {
            FailureKind::ServiceReported => "Error en el Análisis",
            FailureKind::Unavailable => "No se pudo completar el análisis",
        };
        Self { title, message }
    }

    fn rejected(message: String) -> Self {
        Self {
            title: "Imagen no válida",
            message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptureMode {
    #[default]
    Closed,
    Open {
        facing: Facing,
        error: Option<String>,
    },
}

/// Everything the user has entered on the main screen so far.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub image: Option<ImagePayload>,
    pub symptoms: String,
    pub capture: CaptureMode,
    pub notice: Option<Notice>,
}

impl Draft {
    pub fn request(&self) -> Option<AnalysisRequest> {
        self.image.as_ref().map(|image| {
            AnalysisRequest::new(image.bytes.clone(), image.mime_type.clone(), &self.symptoms)
        })
    }

    fn edit(&mut self, event: Event) {
        match event {
            Event::ImageSelected(image) => {
                self.image = Some(image);
                self.capture = CaptureMode::Closed;
                self.notice = None;
            }
            Event::ImageRejected(message) => {
                self.notice = Some(Notice::rejected(message));
            }
            Event::ClearImage => {
                self.image = None;
                self.notice = None;
            }
            Event::SymptomsChanged(symptoms) => self.symptoms = symptoms,
            Event::OpenCamera => {
                self.capture = CaptureMode::Open {
                    facing: Facing::default(),
                    error: None,
                };
                self.notice = None;
            }
            Event::CloseCamera => self.capture = CaptureMode::Closed,
            Event::SwitchFacing => {
                if let CaptureMode::Open { facing, .. } = &self.capture {
                    self.capture = CaptureMode::Open {
                        facing: facing.toggled(),
                        error: None,
                    };
                }
            }
            Event::CameraFailed(message) => {
                if let CaptureMode::Open { error, .. } = &mut self.capture {
                    *error = Some(message);
                }
            }
            _ => {}
        }
    }
}

/// Ties an analysis result to the submission that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Default)]
pub enum View {
    #[default]
    Login,
    Main(Draft),
    Loading { draft: Draft, request: RequestId },
    Analysis(Report),
}

#[derive(Debug, Clone)]
pub enum Event {
    Login,
    Logout,
    OpenUpgradeModal,
    CloseUpgradeModal,
    Upgrade,
    ImageSelected(ImagePayload),
    ImageRejected(String),
    ClearImage,
    SymptomsChanged(String),
    OpenCamera,
    CloseCamera,
    SwitchFacing,
    CameraFailed(String),
    SubmitAnalysis,
    AnalysisSettled {
        id: RequestId,
        result: AnalysisResult,
    },
    NewAnalysis,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Analyze {
        id: RequestId,
        request: AnalysisRequest,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub view: View,
    pub history: AnalysisHistory,
    pub upgrade_modal_open: bool,
    /// Submissions issued so far. Survives logout so ids never repeat.
    issued: u64,
}

impl Session {
    pub fn apply(mut self, event: Event) -> (Session, Effect) {
        let mut effect = Effect::None;

        match event {
            Event::Login => {
                if matches!(self.view, View::Login) {
                    self.user = Some(User::default());
                    self.view = View::Main(Draft::default());
                }
            }
            Event::Logout => {
                let issued = self.issued;
                return (
                    Session {
                        issued,
                        ..Session::default()
                    },
                    Effect::None,
                );
            }
            Event::OpenUpgradeModal => {
                if self.user.is_some() {
                    self.upgrade_modal_open = true;
                }
            }
            Event::CloseUpgradeModal => self.upgrade_modal_open = false,
            Event::Upgrade => {
                if let Some(user) = self.user.as_mut() {
                    user.is_premium = true;
                    self.upgrade_modal_open = false;
                }
            }
            Event::SubmitAnalysis => {
                self.view = match self.view {
                    View::Main(mut draft) => match draft.request() {
                        Some(request) => {
                            self.issued += 1;
                            let id = RequestId(self.issued);
                            effect = Effect::Analyze { id, request };
                            draft.notice = None;
                            draft.capture = CaptureMode::Closed;
                            View::Loading { draft, request: id }
                        }
                        None => View::Main(draft),
                    },
                    other => other,
                };
            }
            Event::AnalysisSettled { id, result } => {
                self.view = match self.view {
                    View::Loading { draft, request } if request == id => match result {
                        AnalysisResult::Report(report) => {
                            self.history.record(report.clone());
                            View::Analysis(report)
                        }
                        AnalysisResult::Error { kind, message } => View::Main(Draft {
                            notice: Some(Notice::from_failure(kind, message)),
                            ..draft
                        }),
                    },
                    other => {
                        log::warn!("Ignoring stale analysis result {id:?}");
                        other
                    }
                };
            }
            Event::NewAnalysis => {
                if matches!(self.view, View::Analysis(_)) {
                    self.view = View::Main(Draft::default());
                }
            }
            edit => {
                if let View::Main(draft) = &mut self.view {
                    draft.edit(edit);
                }
            }
        }

        (self, effect)
    }

    pub fn is_premium(&self) -> bool {
        self.user.is_some_and(|user| user.is_premium)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Loading { .. })
    }

    /// The camera facing that should currently be streaming, if any.
    pub fn wanted_camera(&self) -> Option<Facing> {
        match &self.view {
            View::Main(Draft {
                capture: CaptureMode::Open { facing, error: None },
                ..
            }) => Some(*facing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::analysis::{AnalysisCondition, Probability};

    fn image() -> ImagePayload {
        ImagePayload::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg")
    }

    fn step(session: Session, event: Event) -> Session {
        session.apply(event).0
    }

    fn logged_in_with_image() -> Session {
        logged_in_with_image_from(Session::default())
    }

    fn logged_in_with_image_from(session: Session) -> Session {
        let session = step(session, Event::Login);
        step(session, Event::ImageSelected(image()))
    }

    fn submit(session: Session) -> (Session, RequestId) {
        match session.apply(Event::SubmitAnalysis) {
            (session, Effect::Analyze { id, .. }) => (session, id),
            (_, other) => panic!("expected an analysis effect, got {other:?}"),
        }
    }

    fn report(name: &str) -> Report {
        Report::new(vec![AnalysisCondition {
            name: name.to_string(),
            probability: Probability::Medium,
            description: String::new(),
            suggested_treatments: Vec::new(),
            untreated_consequences: Vec::new(),
        }])
    }

    fn analyse(session: Session, result: AnalysisResult) -> Session {
        let (session, id) = submit(session);
        step(session, Event::AnalysisSettled { id, result })
    }

    #[test]
    fn login_moves_to_main_as_free_user() {
        let session = step(Session::default(), Event::Login);
        assert!(matches!(session.view, View::Main(_)));
        assert_eq!(session.user, Some(User { is_premium: false }));
    }

    #[test]
    fn submit_without_image_does_nothing() {
        let session = step(Session::default(), Event::Login);
        let (session, effect) = session.apply(Event::SubmitAnalysis);
        assert_eq!(effect, Effect::None);
        assert!(matches!(session.view, View::Main(_)));
    }

    #[test]
    fn submit_emits_request_and_enters_loading() {
        let session = step(logged_in_with_image(), Event::SymptomsChanged("picor".into()));
        let (session, effect) = session.apply(Event::SubmitAnalysis);

        assert_eq!(
            effect,
            Effect::Analyze {
                id: RequestId(1),
                request: AnalysisRequest {
                    image: vec![0xFF, 0xD8, 0xFF],
                    mime_type: "image/jpeg".to_string(),
                    symptoms: Some("picor".to_string()),
                },
            }
        );
        assert!(session.is_loading());
    }

    #[test]
    fn resubmission_while_loading_is_ignored() {
        let (session, _) = logged_in_with_image().apply(Event::SubmitAnalysis);
        let (session, effect) = session.apply(Event::SubmitAnalysis);
        assert_eq!(effect, Effect::None);
        assert!(session.is_loading());
    }

    #[test]
    fn report_moves_to_analysis_and_is_recorded() {
        let session = analyse(logged_in_with_image(), AnalysisResult::Report(report("Eccema")));
        assert!(matches!(&session.view, View::Analysis(r) if r.conditions[0].name == "Eccema"));
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn empty_report_is_a_successful_analysis() {
        let session = analyse(logged_in_with_image(), AnalysisResult::Report(Report::default()));
        assert!(matches!(&session.view, View::Analysis(r) if r.is_empty()));
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn failure_returns_to_main_with_notice_and_keeps_history() {
        let session = analyse(logged_in_with_image(), AnalysisResult::Report(report("Primero")));
        let session = step(session, Event::NewAnalysis);
        let session = step(session, Event::ImageSelected(image()));
        let session = analyse(session, AnalysisResult::unavailable());

        assert_eq!(session.history.len(), 1);
        match &session.view {
            View::Main(draft) => {
                let notice = draft.notice.as_ref().expect("notice shown");
                assert_eq!(notice.message, crate::model::SERVICE_UNAVAILABLE_MESSAGE);
                assert!(draft.image.is_some(), "draft kept for retry");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn service_reported_error_is_shown_verbatim() {
        let session = analyse(
            logged_in_with_image(),
            AnalysisResult::Error {
                kind: FailureKind::ServiceReported,
                message: "No parece piel humana.".to_string(),
            },
        );

        match &session.view {
            View::Main(draft) => {
                let notice = draft.notice.as_ref().expect("notice shown");
                assert_eq!(notice.title, "Error en el Análisis");
                assert_eq!(notice.message, "No parece piel humana.");
            }
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(session.history.len(), 0);
    }

    #[test]
    fn history_grows_once_per_successful_analysis_in_order() {
        let mut session = logged_in_with_image();
        for (index, name) in ["A", "B", "C"].iter().enumerate() {
            session = analyse(session, AnalysisResult::Report(report(name)));
            session = step(session, Event::NewAnalysis);
            session = step(session, Event::ImageSelected(image()));
            if index == 1 {
                session = analyse(session, AnalysisResult::unavailable());
            }
        }

        let names: Vec<&str> = session
            .history
            .iter()
            .filter_map(Report::primary_finding)
            .map(|condition| condition.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn late_result_outside_loading_is_ignored() {
        let session = logged_in_with_image();
        let session = step(
            session,
            Event::AnalysisSettled {
                id: RequestId(1),
                result: AnalysisResult::Report(report("X")),
            },
        );
        assert!(matches!(session.view, View::Main(_)));
        assert_eq!(session.history.len(), 0);
    }

    #[test]
    fn result_from_before_logout_does_not_settle_the_next_session() {
        let (session, first) = submit(logged_in_with_image());
        let session = step(session, Event::Logout);
        let (session, second) = submit(logged_in_with_image_from(session));
        assert_ne!(first, second);

        let session = step(
            session,
            Event::AnalysisSettled {
                id: first,
                result: AnalysisResult::Report(report("Anterior")),
            },
        );
        assert!(session.is_loading());
        assert_eq!(session.history.len(), 0);

        let session = step(
            session,
            Event::AnalysisSettled {
                id: second,
                result: AnalysisResult::Report(report("Actual")),
            },
        );
        assert!(matches!(&session.view, View::Analysis(r) if r.conditions[0].name == "Actual"));
        let names: Vec<&str> = session
            .history
            .iter()
            .filter_map(Report::primary_finding)
            .map(|condition| condition.name.as_str())
            .collect();
        assert_eq!(names, vec!["Actual"]);
    }

    #[test]
    fn each_submission_gets_a_fresh_id() {
        let (session, first) = submit(logged_in_with_image());
        let session = step(
            session,
            Event::AnalysisSettled {
                id: first,
                result: AnalysisResult::unavailable(),
            },
        );
        let (_, second) = submit(session);
        assert_ne!(first, second);
    }

    #[test]
    fn logout_clears_everything() {
        let session = analyse(logged_in_with_image(), AnalysisResult::Report(report("X")));
        let session = step(session, Event::OpenUpgradeModal);
        let session = step(session, Event::Logout);

        assert!(matches!(session.view, View::Login));
        assert!(session.user.is_none());
        assert_eq!(session.history.len(), 0);
        assert!(!session.upgrade_modal_open);
    }

    #[test]
    fn upgrade_requires_a_user_and_closes_modal() {
        let session = step(Session::default(), Event::Upgrade);
        assert!(!session.is_premium());

        let session = step(Session::default(), Event::Login);
        let session = step(session, Event::OpenUpgradeModal);
        assert!(session.upgrade_modal_open);
        let session = step(session, Event::Upgrade);
        assert!(session.is_premium());
        assert!(!session.upgrade_modal_open);
    }

    #[test]
    fn camera_sub_state_drives_wanted_camera() {
        let session = step(Session::default(), Event::Login);
        assert_eq!(session.wanted_camera(), None);

        let session = step(session, Event::OpenCamera);
        assert_eq!(session.wanted_camera(), Some(Facing::Environment));

        let session = step(session, Event::CameraFailed("denegado".into()));
        assert_eq!(session.wanted_camera(), None);

        let session = step(session, Event::SwitchFacing);
        assert_eq!(session.wanted_camera(), Some(Facing::User));

        let session = step(session, Event::ImageSelected(image()));
        assert_eq!(session.wanted_camera(), None);
    }

    #[test]
    fn rejected_file_shows_notice_without_touching_image() {
        let session = step(logged_in_with_image(), Event::ImageRejected("formato".into()));
        match &session.view {
            View::Main(draft) => {
                assert!(draft.image.is_some());
                assert_eq!(draft.notice.as_ref().map(|n| n.title), Some("Imagen no válida"));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }
}
