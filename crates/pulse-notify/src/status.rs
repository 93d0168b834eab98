use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Public demo GraphQL endpoint the status check is issued against.
pub const STATUS_ENDPOINT: &str = "https://countries.trevorblades.com/";

/// Minimal liveness query; the payload itself is never consumed.
const STATUS_QUERY: &str = "{ __typename }";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("status request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status endpoint returned HTTP {0}")]
    Http(u16),
    #[error("status response carried errors")]
    Graphql,
    #[error("status response had no data payload")]
    EmptyPayload,
}

#[derive(Serialize)]
struct GraphqlRequest {
    query: &'static str,
}

/// Boundary seam for the outbound status check.
///
/// Production code uses [`GraphqlProbe`]; tests script a fake. `check` never
/// errors: transport and response failures are logged by the implementation
/// and reduced to `false`, which callers treat the same as an unhealthy
/// response. Nothing is retried.
pub trait StatusProbe {
    /// Resolves to `true` when the remote endpoint looks healthy.
    fn check(&self) -> impl Future<Output = bool>;
}

/// POST-style GraphQL status check against a fixed endpoint. Success is
/// reduced to a boolean: HTTP ok, a `data` payload, and no `errors` field.
pub struct GraphqlProbe {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlProbe {
    pub fn new() -> Self {
        Self::with_endpoint(STATUS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn query_status(&self) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest {
                query: STATUS_QUERY,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(NotifyError::Http(resp.status().as_u16()));
        }

        let body: Value = resp.json().await?;
        if body.get("errors").is_some() {
            return Err(NotifyError::Graphql);
        }
        if body.get("data").is_none() {
            return Err(NotifyError::EmptyPayload);
        }
        Ok(())
    }
}

impl Default for GraphqlProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProbe for GraphqlProbe {
    async fn check(&self) -> bool {
        match self.query_status().await {
            Ok(()) => true,
            Err(err) => {
                log::warn!("status check failed: {err}");
                false
            }
        }
    }
}
