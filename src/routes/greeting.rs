//! Handler for the root greeting route.

use tracing::instrument;

use crate::config::GREETING_BODY;

/// Root handler.
///
/// Every request to `/` gets the same plaintext greeting with status 200.
/// There are no parameters and no failure modes; the response is a fixed
/// literal.
#[instrument(name = "greeting::index")]
pub async fn index() -> &'static str {
    GREETING_BODY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_the_exact_greeting() {
        let body = index().await;
        assert_eq!(body, "Hello World, from Dockers and Kubernetes!");
    }
}
