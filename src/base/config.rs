//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use serde::Deserialize;

use super::types::Res;

/// Default listen port.
fn default_port() -> u16 {
    5000
}

/// Default listen address.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default route for the Slack events webhook.
fn default_events_path() -> String {
    "/slack/events".to_string()
}

/// Default dedup retention, comfortably longer than Slack's redelivery window.
fn default_dedup_ttl_secs() -> u64 {
    3600
}

/// Configuration for the jira-bridge application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack bot token used to post replies (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Shared secret Slack sends in every event envelope (`SLACK_VERIFICATION_TOKEN`).
    pub slack_verification_token: String,
    /// Base URL of the Jira instance, e.g. `https://acme.atlassian.net` (`JIRA_URL`).
    pub jira_url: String,
    /// Jira account email for basic auth (`JIRA_EMAIL`).
    pub jira_email: String,
    /// Jira API token for basic auth (`JIRA_API_TOKEN`).
    pub jira_api_token: String,
    /// Key of the project new issues are filed under (`JIRA_PROJECT_KEY`).
    pub jira_project_key: String,
    /// Port the webhook server listens on (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Address the webhook server binds to (`LISTEN_HOST`).
    #[serde(default = "default_host")]
    pub listen_host: String,
    /// Route Slack posts events to (`EVENTS_PATH`).
    #[serde(default = "default_events_path")]
    pub events_path: String,
    /// How long a seen event id suppresses redeliveries, in seconds (`DEDUP_TTL_SECS`).
    #[serde(default = "default_dedup_ttl_secs")]
    pub dedup_ttl_secs: u64,
}

impl ConfigInner {
    /// The dedup retention as a [`Duration`].
    pub fn dedup_ttl(&self) -> Duration {
        Duration::from_secs(self.dedup_ttl_secs)
    }

    /// The Jira base URL without a trailing slash.
    pub fn jira_base_url(&self) -> &str {
        self.jira_url.trim_end_matches('/')
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Wraps an already-built [`ConfigInner`], applying the same checks as [`Config::load`].
    pub fn from_inner(inner: ConfigInner) -> Res<Self> {
        let result = Config { inner: Arc::new(inner) };
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        let required = [
            ("SLACK_BOT_TOKEN", &self.slack_bot_token),
            ("SLACK_VERIFICATION_TOKEN", &self.slack_verification_token),
            ("JIRA_URL", &self.jira_url),
            ("JIRA_EMAIL", &self.jira_email),
            ("JIRA_API_TOKEN", &self.jira_api_token),
            ("JIRA_PROJECT_KEY", &self.jira_project_key),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(anyhow::anyhow!("{name} must be set and non-empty."));
            }
        }

        let url = reqwest::Url::parse(&self.jira_url).map_err(|e| anyhow::anyhow!("JIRA_URL is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!("JIRA_URL must use http or https."));
        }

        if !self.events_path.starts_with('/') {
            return Err(anyhow::anyhow!("EVENTS_PATH must start with `/`."));
        }

        if self.dedup_ttl_secs == 0 {
            return Err(anyhow::anyhow!("DEDUP_TTL_SECS must be greater than zero."));
        }

        Ok(())
    }
}
