use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{config::Configuration, error::FetchError};

mod hardcoded;
mod model;

pub use hardcoded::HardcodedMemberSource;
pub use model::RemoteMember;

use model::GitHubError;

/// Anything that can hand us the organization's member list
pub trait MemberSource {
    fn fetch_member_list(&self) -> Result<Vec<RemoteMember>, FetchError>;
}

impl<T: MemberSource + ?Sized> MemberSource for &T {
    fn fetch_member_list(&self) -> Result<Vec<RemoteMember>, FetchError> {
        (**self).fetch_member_list()
    }
}

impl<T: MemberSource + ?Sized> MemberSource for Box<T> {
    fn fetch_member_list(&self) -> Result<Vec<RemoteMember>, FetchError> {
        (**self).fetch_member_list()
    }
}

/// Fetches members from the GitHub REST API.
///
/// One request, one page: no pagination, no retries and no timeout other than
/// what the HTTP client does on its own.
pub struct GitHubMemberApi {
    client: reqwest::blocking::Client,
    members_url: String,
    user_agent: String,
    token: Option<String>,
}

impl GitHubMemberApi {
    pub fn new(configuration: &Configuration) -> Self {
        Self::with_client(configuration, reqwest::blocking::Client::new())
    }

    pub fn with_client(configuration: &Configuration, client: reqwest::blocking::Client) -> Self {
        let members_url = format!(
            "{}/orgs/{}/members",
            configuration.base_url.trim_end_matches('/'),
            configuration.organization
        );

        Self {
            client,
            members_url,
            user_agent: configuration.user_agent.clone(),
            token: configuration.token.clone(),
        }
    }

    pub fn members_url(&self) -> &str {
        &self.members_url
    }

    /// Status, the reason phrase the server sent (when it differs from the standard one)
    /// and the body.
    fn make_github_request(&self) -> Result<(StatusCode, Option<String>, String), FetchError> {
        debug!(url = %self.members_url, "requesting organization members");

        let mut request = self
            .client
            .get(&self.members_url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send()?;
        let status = response.status();
        let reason = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());
        let content = response.text()?;

        debug!(status = status.as_u16(), bytes = content.len(), "GitHub answered");
        Ok((status, reason, content))
    }
}

impl MemberSource for GitHubMemberApi {
    fn fetch_member_list(&self) -> Result<Vec<RemoteMember>, FetchError> {
        let (status, reason, content) = self.make_github_request()?;

        if let Err(e) = check_status(status, reason.as_deref(), &content) {
            warn!(url = %self.members_url, error = %e, "GitHub refused the member list");
            return Err(e);
        }

        resolve_members(parse_json(&content)?)
    }
}

/// Only statuses in [200, 300) go through. For anything else the error carries the
/// reason phrase, plus GitHub's own message when the body is one of its error documents.
///
/// `reason` is the phrase from the status line. Without one we fall back to the
/// standard phrase for the code.
pub fn check_status(
    status: StatusCode,
    reason: Option<&str>,
    body: &str,
) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }

    let message = serde_json::from_str::<GitHubError>(body)
        .ok()
        .map(|e| match e.documentation_url {
            Some(url) => format!("{} ({url})", e.message),
            None => e.message,
        });

    Err(FetchError::Status {
        status: status.as_u16(),
        status_text: reason
            .or_else(|| status.canonical_reason())
            .unwrap_or_default()
            .to_string(),
        message,
    })
}

pub fn parse_json(content: &str) -> Result<Value, FetchError> {
    Ok(serde_json::from_str::<Value>(content)?)
}

/// Project every element of the array onto a [`RemoteMember`], keeping the order.
pub fn resolve_members(data: Value) -> Result<Vec<RemoteMember>, FetchError> {
    match data {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value::<RemoteMember>(item).map_err(FetchError::from))
            .collect(),
        Value::Object(_) => Err(FetchError::UnexpectedShape(
            "expected an array of members, got an object".to_string(),
        )),
        other => Err(FetchError::UnexpectedShape(format!(
            "expected an array of members, got {other}"
        ))),
    }
}
