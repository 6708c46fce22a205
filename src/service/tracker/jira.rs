//! Jira Cloud REST v3 implementation of the tracker service.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::base::{
    config::Config,
    types::{CreatedIssue, IssueFields, Res},
};

use super::{GenericTrackerClient, TrackerClient};

/// Every issue the bridge files uses this issue type.
pub const ISSUE_TYPE: &str = "Task";

// Extra methods on `TrackerClient` applied by the jira implementation.

impl TrackerClient {
    pub fn jira(config: &Config) -> Self {
        let client = JiraTrackerClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Request types.

/// A node in an Atlassian Document Format tree.
#[derive(Debug, Clone, Serialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
}

/// The root of an Atlassian Document Format description.
#[derive(Debug, Clone, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: u32,
    pub content: Vec<AdfNode>,
}

impl AdfDocument {
    /// A document holding `text` as one plain paragraph.
    pub fn paragraph(text: &str) -> Self {
        let text_node = AdfNode {
            kind: "text",
            text: Some(text.to_string()),
            content: Vec::new(),
        };

        Self {
            kind: "doc",
            version: 1,
            content: vec![AdfNode {
                kind: "paragraph",
                text: None,
                content: vec![text_node],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct KeyRef<'a> {
    key: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct NameRef<'a> {
    name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct IssueCreateFields<'a> {
    project: KeyRef<'a>,
    summary: &'a str,
    description: AdfDocument,
    issuetype: NameRef<'a>,
    priority: NameRef<'a>,
    reporter: NameRef<'a>,
}

/// Body of `POST /rest/api/3/issue`.
#[derive(Debug, Clone, Serialize)]
pub struct IssueCreateRequest<'a> {
    fields: IssueCreateFields<'a>,
}

impl<'a> IssueCreateRequest<'a> {
    pub fn new(project_key: &'a str, fields: &'a IssueFields) -> Self {
        Self {
            fields: IssueCreateFields {
                project: KeyRef { key: project_key },
                summary: &fields.summary,
                description: AdfDocument::paragraph(&fields.summary),
                issuetype: NameRef { name: ISSUE_TYPE },
                priority: NameRef { name: &fields.priority },
                reporter: NameRef { name: &fields.reporter },
            },
        }
    }
}

// Specific implementations.

/// Jira tracker client implementation.
#[derive(Clone)]
pub struct JiraTrackerClient {
    http: reqwest::Client,
    issue_url: String,
    email: String,
    api_token: String,
    project_key: String,
}

impl JiraTrackerClient {
    /// Create a new Jira tracker client.
    #[instrument(name = "JiraTrackerClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            issue_url: format!("{}/rest/api/3/issue", config.jira_base_url()),
            email: config.jira_email.clone(),
            api_token: config.jira_api_token.clone(),
            project_key: config.jira_project_key.clone(),
        }
    }
}

#[async_trait]
impl GenericTrackerClient for JiraTrackerClient {
    #[instrument(skip_all, fields(summary = %fields.summary))]
    async fn create_issue(&self, fields: &IssueFields) -> Res<CreatedIssue> {
        let body = IssueCreateRequest::new(&self.project_key, fields);

        let response = self
            .http
            .post(&self.issue_url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::CREATED {
            let text = response.text().await.unwrap_or_default();
            error!("Failed to create Jira issue: {} {}", status, text);
            return Err(anyhow::anyhow!("Jira responded with {status}: {text}"));
        }

        let created: CreatedIssue = response.json().await?;

        info!("Jira issue created successfully: {}", created.key);

        Ok(created)
    }
}

// Tests.
