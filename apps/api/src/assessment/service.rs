use tracing::{debug, info, warn};

use crate::assessment::scoring::score_request;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRequest, AssessmentResponse, AssessmentResult};
use crate::store::{DocumentStore, PersistOutcome};

pub const RESULT_COLLECTION: &str = "assessmentresult";

/// Writes a scored result. Never fails: errors become `PersistOutcome::Failed`.
pub async fn persist_result(
    store: Option<&dyn DocumentStore>,
    result: &AssessmentResult,
) -> PersistOutcome {
    let Some(store) = store else {
        return PersistOutcome::Skipped;
    };

    let fields = match serde_json::to_value(result) {
        Ok(fields) => fields,
        Err(e) => return PersistOutcome::Failed(e.into()),
    };

    match store.create_document(RESULT_COLLECTION, fields).await {
        Ok(id) => {
            info!(id = %id, "Assessment result stored");
            PersistOutcome::Stored(id)
        }
        Err(e) => PersistOutcome::Failed(e),
    }
}

/// Scores the answers, then stores the result best-effort.
/// Only input errors can fail this; a store outage just leaves `id` empty.
pub async fn assess(
    store: Option<&dyn DocumentStore>,
    req: &AssessmentRequest,
) -> Result<AssessmentResponse, AppError> {
    let result = score_request(req)?;
    debug!(
        answers = req.answers.len(),
        agreed = result.scores.total(),
        top_types = ?result.top_types,
        "Assessment scored"
    );

    let id = match persist_result(store, &result).await {
        PersistOutcome::Stored(id) => Some(id),
        PersistOutcome::Skipped => None,
        PersistOutcome::Failed(e) => {
            warn!("Assessment result not stored: {e}");
            None
        }
    };
    Ok(AssessmentResponse::new(id, result))
}
