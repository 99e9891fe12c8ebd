use crate::constants::LIVENESS_BODY;

/// Liveness check endpoint
///
/// Returns a fixed text body so the hosting platform can probe the process.
pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}
