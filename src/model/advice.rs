use std::time::Duration;

pub const ADVICE_DELAY: Duration = Duration::from_millis(1500);

/// Local state of the premium advice panel. Answers are simulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceState {
    pub question: String,
    pub answer: Option<String>,
    pub pending: bool,
}

impl AdviceState {
    /// Marks a question as asked and returns it, or `None` when there is
    /// nothing to ask or an answer is still on its way.
    pub fn ask(&mut self) -> Option<String> {
        if self.pending || self.question.trim().is_empty() {
            return None;
        }
        self.pending = true;
        self.answer = None;
        Some(self.question.clone())
    }

    pub fn answered(&mut self, answer: String) {
        self.pending = false;
        self.answer = Some(answer);
        self.question.clear();
    }
}

pub fn simulated_answer(question: &str) -> String {
    format!(
        "Respuesta simulada para: \"{question}\". Como IA, te recomiendo mantener una rutina de limpieza constante y consultar a tu dermatólogo para obtener consejos adaptados específicamente a tu tipo de piel."
    )
}
