use thiserror::Error;

use crate::LabelError;

/// Unified error type for the fallible entry points.
///
/// The editing operations themselves are total and never return it.
#[derive(Debug, Error)]
pub enum TagExprError {
    #[error(transparent)]
    Label(#[from] LabelError),

    #[cfg(feature = "serde")]
    #[error("invalid form value JSON: {0}")]
    Json(#[from] serde_json::Error),
}
