use serde::{Deserialize, Serialize};

use crate::analysis::coverage::CoverageResult;

/// Status marker returned with every successful analysis.
pub const STATUS_COMPLETE: &str = "analysis_complete";

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw text extracted from the résumé.
    pub resume_text: String,
    pub job_description: String,
    /// Role the candidate is targeting. Logged only; not scored.
    pub target_role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub ats_score: u8,
    pub missing_keywords: Vec<String>,
    pub status: String,
}

impl From<CoverageResult> for AnalyzeResponse {
    fn from(result: CoverageResult) -> Self {
        AnalyzeResponse {
            ats_score: result.score,
            missing_keywords: result.missing_terms,
            status: STATUS_COMPLETE.to_string(),
        }
    }
}
