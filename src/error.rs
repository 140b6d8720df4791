use thiserror::Error;

/// Everything that can go wrong while fetching the member list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response, or its body couldn't be read
    #[error("couldn't talk to GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a status outside of [200, 300).
    /// The message is the status text alone, GitHub's own explanation is kept apart.
    #[error("{status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("could not deserialize GitHub's response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl FetchError {
    /// HTTP status of the failed response, if GitHub answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no organization configured (use --org, GH_ORG or the config file)")]
    MissingOrganization,

    #[error("invalid organization name {0:?}: only ASCII letters, digits and '-' are allowed")]
    InvalidOrganization(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
