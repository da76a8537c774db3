pub mod gemini;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::{AnalysisReply, AnalysisRequest, AnalysisResult};

pub use gemini::GeminiClient;

/// The single boundary between the UI and the reasoning service.
///
/// Implementations never fail: every recoverable problem is folded into
/// the returned [`AnalysisResult`].
#[async_trait]
pub trait SkinAnalyzer: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> AnalysisResult;
}

/// Decodes the model's reply text. No partial recovery is attempted.
pub fn parse_reply(text: &str) -> Result<AnalysisResult, ServiceError> {
    let reply: AnalysisReply = serde_json::from_str(text.trim())?;
    Ok(AnalysisResult::from_reply(reply))
}
