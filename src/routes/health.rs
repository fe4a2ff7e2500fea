//! Health check endpoint for container orchestration.
//!
//! Liveness and readiness probes in the deployment manifest both point here.
//! The service holds no state and has no dependencies to check, so liveness
//! and readiness coincide: if the process answers HTTP, it is ready.

/// Health check handler.
///
/// Returns "ok" when the process can respond to HTTP.
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        assert_eq!(health().await, "ok");
    }
}
