use async_trait::async_trait;
use reqwest::{Client, Method};
use shared::{domain::Roster, protocol::MessageResponse};
use url::Url;

use crate::error::ClientError;

/// Result of a signup or unregister request that reached the server.
///
/// A non-2xx status is an ordinary outcome here, not an error; only failures
/// to obtain or decode a response surface as [`ClientError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Accepted { message: String },
    Rejected { status: u16, detail: Option<String> },
}

#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn list_activities(&self) -> Result<Roster, ClientError>;
    async fn signup(&self, activity_name: &str, email: &str)
        -> Result<MutationOutcome, ClientError>;
    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError>;
}

pub struct HttpActivitiesApi {
    http: Client,
    base_url: Url,
}

impl HttpActivitiesApi {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(server_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::UnsupportedBaseUrl(server_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn activities_url(&self) -> Result<Url, ClientError> {
        self.route(&["activities"])
    }

    /// `/activities/{activity_name}/signup?email={email}` with the activity
    /// name encoded as a path segment and the email as a query value.
    pub fn signup_url(&self, activity_name: &str, email: &str) -> Result<Url, ClientError> {
        let mut url = self.route(&["activities", activity_name, "signup"])?;
        url.query_pairs_mut().clear().append_pair("email", email);
        Ok(url)
    }

    fn route(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| ClientError::UnsupportedBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send_mutation(
        &self,
        method: Method,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        let url = self.signup_url(activity_name, email)?;
        let response = self.http.request(method, url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let MessageResponse { message } = serde_json::from_slice(&body)?;
            return Ok(MutationOutcome::Accepted { message });
        }

        Ok(MutationOutcome::Rejected {
            status: status.as_u16(),
            detail: error_detail(&body),
        })
    }
}

/// `detail` from an error body, when the body is JSON and the field is text.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<Roster, ClientError> {
        let response = self.http.get(self.activities_url()?).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        self.send_mutation(Method::POST, activity_name, email).await
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MutationOutcome, ClientError> {
        self.send_mutation(Method::DELETE, activity_name, email).await
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
