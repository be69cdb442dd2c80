//! Coverage Scoring — how many job-description terms the résumé already contains.
//!
//! The scorer is a pure function. Handlers reach it through the `CoverageScorer`
//! capability held in `AppState` as `Arc<dyn CoverageScorer>`, so tests can swap
//! in their own implementation without touching the route code.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::tokenize;

/// Maximum number of missing terms reported back to the caller.
pub const MAX_MISSING_TERMS: usize = 5;

/// Result of a single coverage computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub score: u8,                  // 0 – 100
    pub missing_terms: Vec<String>, // sorted, at most MAX_MISSING_TERMS
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Narrow scoring capability injected into the request layer.
pub trait CoverageScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_text: &str) -> CoverageResult;
}

/// Default scorer: plain keyword coverage, see [`score`].
pub struct KeywordCoverageScorer;

impl CoverageScorer for KeywordCoverageScorer {
    fn score(&self, resume_text: &str, job_text: &str) -> CoverageResult {
        score(resume_text, job_text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core coverage algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` against `job_text`.
///
/// Algorithm:
/// 1. Tokenize both documents (lower-case, whitespace split, dedup).
/// 2. missing = job tokens − résumé tokens
/// 3. score = ⌊(|job| − |missing|) × 100 / |job|⌋, or 0 when the job has no tokens
/// 4. missing_terms = first `MAX_MISSING_TERMS` of `missing` in lexicographic order
///
/// Never fails: empty inputs map to a zero score.
pub fn score(resume_text: &str, job_text: &str) -> CoverageResult {
    let resume_tokens = tokenize(resume_text);
    let job_tokens = tokenize(job_text);

    if job_tokens.is_empty() {
        return CoverageResult {
            score: 0,
            missing_terms: vec![],
        };
    }

    let mut missing_count = 0;
    let mut missing_terms = Vec::with_capacity(MAX_MISSING_TERMS);
    for token in job_tokens.missing_from(&resume_tokens) {
        if missing_terms.len() < MAX_MISSING_TERMS {
            missing_terms.push(token.to_owned());
        }
        missing_count += 1;
    }

    let total = job_tokens.len();
    let match_count = total - missing_count;
    // match_count <= total, so the quotient is at most 100
    let score = (match_count * 100 / total) as u8;

    CoverageResult {
        score,
        missing_terms,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
