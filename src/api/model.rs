use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A member as GitHub returns it from `/orgs/{org}/members`.
///
/// Only the three fields we care about are kept, anything else in the payload is
/// dropped on deserialization. A field GitHub leaves out, sends as `null` or sends with
/// an unexpected type ends up as `None` instead of failing the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct RemoteMember {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_url: Option<String>,
}

impl RemoteMember {
    pub fn new(id: u64, login: &str, avatar_url: &str) -> Self {
        Self {
            id: Some(id),
            login: Some(login.to_string()),
            avatar_url: Some(avatar_url.to_string()),
        }
    }
}

/// Take the field if it has the type we expect, otherwise treat it as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The error document GitHub sends along with a non-2xx status
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubError {
    pub message: String,
    #[serde(default, deserialize_with = "lenient")]
    pub documentation_url: Option<String>,
}
