pub mod formatting;

pub use formatting::{finding_summary, previous_analysis_label, probability_caption};
