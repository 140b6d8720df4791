use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ORGANIZATION: &str = "lemoncode";
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_CONFIG_FILE: &str = "gh-members.toml";

/// Everything the member API needs to know about where to look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub organization: String,
    pub base_url: String,
    /// Not needed for public membership, only sent when present
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// What a config file may set. Every key is optional and overrides the default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationFile {
    organization: Option<String>,
    base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
}

/// Values given on the command line, they beat everything else
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub organization: Option<String>,
    pub base_url: Option<String>,
}

impl Configuration {
    fn apply_file(&mut self, file: ConfigurationFile) {
        if let Some(organization) = file.organization {
            self.organization = organization;
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if file.token.is_some() {
            self.token = file.token;
        }
        if let Some(user_agent) = file.user_agent {
            self.user_agent = user_agent;
        }
    }

    /// GH_ORG, GH_TOKEN and GH_API_URL, looked up through `lookup` so tests don't
    /// have to touch the process environment.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(organization) = lookup("GH_ORG") {
            self.organization = organization;
        }
        if let Some(token) = lookup("GH_TOKEN").filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(base_url) = lookup("GH_API_URL") {
            self.base_url = base_url;
        }
    }

    fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(organization) = overrides.organization {
            self.organization = organization;
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.organization.trim().is_empty() {
            return Err(ConfigError::MissingOrganization);
        }
        // It goes straight into the URL path
        if !self
            .organization
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::InvalidOrganization(self.organization));
        }
        Ok(self)
    }
}

fn read_configuration_file(path: &Path) -> Result<ConfigurationFile, ConfigError> {
    let buf = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&buf).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Build the configuration from, in increasing priority: the defaults, the config file,
/// the environment and the command line.
///
/// If no path is given we look for `gh-members.toml` in the current directory and
/// carry on without it if it isn't there. A path that was given explicitly must exist.
pub fn get_configuration(
    path: Option<PathBuf>,
    overrides: Overrides,
) -> Result<Configuration, ConfigError> {
    build_configuration(path, overrides, |key| std::env::var(key).ok())
}

fn build_configuration(
    path: Option<PathBuf>,
    overrides: Overrides,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Configuration, ConfigError> {
    let mut configuration = Configuration::default();

    let path = path.or_else(|| {
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.is_file().then_some(default)
    });
    if let Some(path) = path {
        configuration.apply_file(read_configuration_file(&path)?);
    }

    configuration.apply_env(lookup);
    configuration.apply_overrides(overrides);
    configuration.validate()
}
