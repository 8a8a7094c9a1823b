use crate::models::Outcome;
use tracing::error;

/// Header the endpoint uses to tell programmatic calls from navigation.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Issues the action requests: bare GET with the `X-Requested-With` marker,
/// no body, no client-side timeout, no explicit credentials beyond ambient
/// ones. The response body is never read.
#[derive(Debug, Clone, Default)]
pub struct ActionClient {
    http: reqwest::Client,
}

impl ActionClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Classifies the round trip into the three outcomes the page reacts to.
    /// An unusable url (including the empty one a missing `data-url` leaves
    /// behind) surfaces as a transport failure, not a panic.
    pub async fn send(&self, url: &str) -> Outcome {
        let result = self
            .http
            .get(url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => Outcome::Success,
            Ok(_) => Outcome::RequestRejected,
            Err(err) => {
                error!("action request failed: {err}");
                Outcome::TransportFailure
            }
        }
    }
}
