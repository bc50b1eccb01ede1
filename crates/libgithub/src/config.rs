use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// GitHub's GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Settings for the [`HttpTransport`](crate::http::HttpTransport).
///
/// Deserializable from any serde format; every member is optional and falls
/// back to its default.
#[derive(Clone, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
    /// Sent as a bearer token when set.
    pub token: Option<String>,
    pub user_agent: String,
}
impl ClientConfig {
    /// The defaults, overridden by the `GITHUB_TOKEN` and
    /// `GITHUB_GRAPHQL_URL` environment variables when they are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(token) = env_var("GITHUB_TOKEN") {
            config.token = Some(token);
        }
        if let Some(endpoint) = env_var("GITHUB_GRAPHQL_URL") {
            config.endpoint = endpoint;
        }
        config
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: Some(30),
            token: None,
            user_agent: format!("libgithub/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::config::DEFAULT_ENDPOINT;
    use std::time::Duration;

    #[test]
    fn defaults_target_github() {
        let config = ClientConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.token, None);
        assert!(config.user_agent.starts_with("libgithub/"));
    }

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{
            "token": "ghp_123",
            "timeout_secs": null
        }"#).unwrap();

        assert_eq!(config.token.as_deref(), Some("ghp_123"));
        assert_eq!(config.timeout(), None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let config = ClientConfig::default().with_token("ghp_secret");

        let debug = format!("{config:?}");

        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn setters_override() {
        let config =
            ClientConfig::default()
                .with_endpoint("https://ghe.example.com/api/graphql")
                .with_timeout(Duration::from_secs(5))
                .with_user_agent("my-tool/1.0");

        assert_eq!(config.endpoint, "https://ghe.example.com/api/graphql");
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.user_agent, "my-tool/1.0");
    }
}
