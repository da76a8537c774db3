use serde::{Deserialize, Serialize};

/// Shown whenever the service cannot be reached or answers with something
/// that is not an analysis document.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "No se pudo comunicar con el servicio de IA. Por favor, verifique su conexión o intente más tarde.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Probability {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

impl Probability {
    pub const ALL: [Probability; 3] = [Probability::High, Probability::Medium, Probability::Low];

    pub fn label(self) -> &'static str {
        match self {
            Probability::High => "Alta",
            Probability::Medium => "Media",
            Probability::Low => "Baja",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCondition {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "probabilidad")]
    pub probability: Probability,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tratamientosSugeridos")]
    pub suggested_treatments: Vec<String>,
    #[serde(rename = "consecuenciasNoTratamiento")]
    pub untreated_consequences: Vec<String>,
}

/// The document exactly as the service returns it. Both members are
/// optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisReply {
    #[serde(default)]
    pub analisis: Option<Vec<AnalysisCondition>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Conditions found in one image, in the order the service ranked them.
/// An empty report is a valid "no findings" outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub conditions: Vec<AnalysisCondition>,
}

impl Report {
    pub fn new(conditions: Vec<AnalysisCondition>) -> Self {
        Self { conditions }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn primary_finding(&self) -> Option<&AnalysisCondition> {
        self.conditions.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service looked at the input and declined to analyse it.
    ServiceReported,
    /// Transport, status, timeout or decoding failure.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Report(Report),
    Error { kind: FailureKind, message: String },
}

impl AnalysisResult {
    pub fn unavailable() -> Self {
        AnalysisResult::Error {
            kind: FailureKind::Unavailable,
            message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// A non-blank `error` wins over any `analisis` list sent alongside it.
    pub fn from_reply(reply: AnalysisReply) -> Self {
        match reply.error {
            Some(message) if !message.trim().is_empty() => AnalysisResult::Error {
                kind: FailureKind::ServiceReported,
                message,
            },
            _ => AnalysisResult::Report(Report::new(reply.analisis.unwrap_or_default())),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            AnalysisResult::Report(report) => Some(report),
            AnalysisResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Report(_) => None,
            AnalysisResult::Error { message, .. } => Some(message),
        }
    }

    pub fn is_no_findings(&self) -> bool {
        self.report().is_some_and(Report::is_empty)
    }
}

/// Reports produced during the current session, oldest first. Append-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisHistory {
    entries: Vec<Report>,
}

impl AnalysisHistory {
    pub fn record(&mut self, report: Report) {
        self.entries.push(report);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.entries.iter()
    }

    /// Every report except the latest, newest first, paired with its
    /// 1-based position in the session.
    pub fn previous(&self) -> impl Iterator<Item = (usize, &Report)> {
        let count = if self.is_empty() { 0 } else { self.len() - 1 };
        self.iter()
            .take(count)
            .enumerate()
            .rev()
            .map(|(index, report)| (index + 1, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(name: &str, probability: Probability) -> AnalysisCondition {
        AnalysisCondition {
            name: name.to_string(),
            probability,
            description: format!("{name} description"),
            suggested_treatments: vec!["Hidratación".to_string()],
            untreated_consequences: vec!["Irritación".to_string()],
        }
    }

    #[test]
    fn condition_uses_spanish_wire_keys() {
        let json = r#"{
            "nombre": "Acné vulgar",
            "probabilidad": "Alta",
            "descripcion": "Inflamación de folículos.",
            "tratamientosSugeridos": ["Limpieza suave", "Peróxido de benzoilo"],
            "consecuenciasNoTratamiento": ["Cicatrices"]
        }"#;

        let parsed: AnalysisCondition = serde_json::from_str(json).expect("valid condition");
        assert_eq!(parsed.name, "Acné vulgar");
        assert_eq!(parsed.probability, Probability::High);
        assert_eq!(parsed.suggested_treatments.len(), 2);
        assert_eq!(parsed.untreated_consequences, vec!["Cicatrices".to_string()]);
    }

    #[test]
    fn condition_rejects_unknown_probability() {
        let json = r#"{
            "nombre": "X",
            "probabilidad": "Segura",
            "descripcion": "",
            "tratamientosSugeridos": [],
            "consecuenciasNoTratamiento": []
        }"#;
        assert!(serde_json::from_str::<AnalysisCondition>(json).is_err());
    }

    #[test]
    fn condition_requires_every_field() {
        let json = r#"{"nombre": "X", "probabilidad": "Baja", "descripcion": ""}"#;
        assert!(serde_json::from_str::<AnalysisCondition>(json).is_err());
    }

    #[test]
    fn probability_labels_match_wire_values() {
        for probability in Probability::ALL {
            let wire = serde_json::to_value(probability).expect("serializable");
            assert_eq!(wire, serde_json::Value::String(probability.label().to_string()));
        }
    }

    #[test]
    fn error_takes_precedence_over_conditions() {
        let reply = AnalysisReply {
            analisis: Some(vec![condition("Eccema", Probability::Medium)]),
            error: Some("La imagen no muestra piel humana.".to_string()),
        };

        let result = AnalysisResult::from_reply(reply);
        assert_eq!(
            result,
            AnalysisResult::Error {
                kind: FailureKind::ServiceReported,
                message: "La imagen no muestra piel humana.".to_string(),
            }
        );
        assert!(result.report().is_none());
    }

    #[test]
    fn blank_error_is_ignored() {
        let reply = AnalysisReply {
            analisis: Some(vec![condition("Rosácea", Probability::Low)]),
            error: Some("  ".to_string()),
        };

        let result = AnalysisResult::from_reply(reply);
        assert_eq!(result.report().map(|report| report.conditions.len()), Some(1));
        assert!(result.error().is_none());
    }

    #[test]
    fn absent_and_empty_lists_are_no_findings() {
        let absent = AnalysisResult::from_reply(AnalysisReply::default());
        let empty = AnalysisResult::from_reply(AnalysisReply {
            analisis: Some(Vec::new()),
            error: None,
        });

        assert!(absent.is_no_findings());
        assert!(empty.is_no_findings());
        assert!(absent.error().is_none());
    }

    #[test]
    fn unavailable_carries_fixed_message() {
        let result = AnalysisResult::unavailable();
        assert_eq!(result.error(), Some(SERVICE_UNAVAILABLE_MESSAGE));
        assert!(!result.is_no_findings());
    }

    #[test]
    fn history_lists_previous_reports_newest_first() {
        let mut history = AnalysisHistory::default();
        history.record(Report::new(vec![condition("Primero", Probability::High)]));
        history.record(Report::default());
        history.record(Report::new(vec![condition("Tercero", Probability::Low)]));

        assert_eq!(history.len(), 3);
        let previous: Vec<usize> = history.previous().map(|(position, _)| position).collect();
        assert_eq!(previous, vec![2, 1]);
        let (_, newest_previous) = history.previous().next().expect("two earlier reports");
        assert!(newest_previous.is_empty());
    }

    #[test]
    fn history_iterates_in_recording_order() {
        let mut history = AnalysisHistory::default();
        assert!(history.is_empty());

        history.record(Report::new(vec![condition("Primero", Probability::High)]));
        history.record(Report::new(vec![condition("Segundo", Probability::Medium)]));

        assert!(!history.is_empty());
        let names: Vec<&str> = history
            .iter()
            .filter_map(Report::primary_finding)
            .map(|condition| condition.name.as_str())
            .collect();
        assert_eq!(names, vec!["Primero", "Segundo"]);
    }

    #[test]
    fn history_with_single_entry_has_no_previous() {
        let mut history = AnalysisHistory::default();
        assert_eq!(history.previous().count(), 0);
        history.record(Report::default());
        assert_eq!(history.previous().count(), 0);
    }
}
