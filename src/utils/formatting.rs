use crate::model::{Probability, Report};

const MAX_SUMMARY_LEN: usize = 80;

pub fn finding_summary(report: &Report) -> String {
    match report.primary_finding() {
        Some(condition) => truncate_text(&format!("Principal hallazgo: {}", condition.name)),
        None => "Sin hallazgos significativos.".to_string(),
    }
}

pub fn previous_analysis_label(position: usize) -> String {
    format!("Análisis Anterior #{position}")
}

pub fn probability_caption(probability: Probability) -> String {
    format!("Probabilidad {}", probability.label())
}

pub fn truncate_text(text: &str) -> String {
    if text.chars().count() > MAX_SUMMARY_LEN {
        let mut truncated = text.chars().take(MAX_SUMMARY_LEN).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalysisCondition;

    fn named(name: &str) -> Report {
        Report::new(vec![AnalysisCondition {
            name: name.to_string(),
            probability: Probability::Low,
            description: String::new(),
            suggested_treatments: Vec::new(),
            untreated_consequences: Vec::new(),
        }])
    }

    #[test]
    fn summary_names_primary_finding() {
        assert_eq!(finding_summary(&named("Psoriasis")), "Principal hallazgo: Psoriasis");
        assert_eq!(finding_summary(&Report::default()), "Sin hallazgos significativos.");
    }

    #[test]
    fn long_summaries_are_truncated_on_char_boundaries() {
        let summary = finding_summary(&named(&"é".repeat(200)));
        assert_eq!(summary.chars().count(), MAX_SUMMARY_LEN + 1);
        assert!(summary.ends_with('…'));
    }

    #[test]
    fn captions() {
        assert_eq!(previous_analysis_label(3), "Análisis Anterior #3");
        assert_eq!(probability_caption(Probability::Medium), "Probabilidad Media");
    }
}
