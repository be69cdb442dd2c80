//! Request policy — checks that run before any scoring happens.
//!
//! Length validation and the confidentiality rule each surface as their own
//! `AppError` variant. A rejected request is never turned into a zero score.

use crate::analysis::models::AnalyzeRequest;
use crate::errors::AppError;

/// Rejects requests whose résumé or job description is shorter than `min_len` characters.
pub fn validate_request(request: &AnalyzeRequest, min_len: usize) -> Result<(), AppError> {
    check_min_length("resume_text", &request.resume_text, min_len)?;
    check_min_length("job_description", &request.job_description, min_len)?;
    Ok(())
}

fn check_min_length(field: &str, value: &str, min_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min_len {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min_len} characters (got {len})"
        )));
    }
    Ok(())
}

/// Rejects job descriptions containing any confidentiality marker, case-insensitively.
///
/// `markers` are expected lower-cased, as produced by `Config`.
pub fn check_confidentiality(job_description: &str, markers: &[String]) -> Result<(), AppError> {
    let job_lower = job_description.to_lowercase();
    if let Some(marker) = markers.iter().find(|m| job_lower.contains(m.as_str())) {
        tracing::warn!(marker = %marker, "Rejected confidential job posting");
        return Err(AppError::Forbidden("Confidential job posting".to_string()));
    }
    Ok(())
}
