//! Turning a Slack message into a Jira issue and reporting the outcome.

use tracing::{error, info, instrument};

use crate::{
    interaction::fields::extract_issue_fields,
    service::{chat::ChatClient, tracker::TrackerClient},
};

/// Reply sent when the tracker refuses or cannot be reached.
pub const CREATE_FAILED_REPLY: &str = "Failed to create Jira issue.";

/// Handles a user message that may describe an issue.
///
/// Parses the text, files the issue when all fields are present, and posts
/// the outcome to `channel_id`. Nothing here fails the caller; every error
/// ends up either in the channel reply or in the log.
#[instrument(skip_all, fields(channel = %channel_id))]
pub async fn handle_issue_request(user: &str, text: &str, channel_id: &str, tracker: &TrackerClient, chat: &ChatClient) {
    info!("Received message from {}: {}", user, text);

    let reply = build_reply(text, tracker).await;

    // Delivery failures are only logged.
    if let Err(err) = chat.send_message(channel_id, &reply).await {
        error!("{}", err);
    }
}

/// Works out what to say back for `text`, creating the issue along the way.
#[instrument(skip_all)]
pub async fn build_reply(text: &str, tracker: &TrackerClient) -> String {
    let fields = match extract_issue_fields(text) {
        Ok(fields) => fields,
        Err(err) => {
            info!("Rejected message: {:?}", err);
            return err.to_string();
        }
    };

    match tracker.create_issue(&fields).await {
        Ok(created) => format!("Jira issue created successfully: {}", created.key),
        Err(err) => {
            error!("Error creating Jira issue: {}", err);
            CREATE_FAILED_REPLY.to_string()
        }
    }
}
