//! Extraction of issue fields from free-text Slack messages.
//!
//! A message is read line by line; any line of the form `Key: value` whose
//! key is `issue`, `priority`, or `reporter` (case-insensitive) sets that
//! field. Later lines override earlier ones.

use crate::base::types::IssueFields;

/// Fields pulled out of a message before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub issue: Option<String>,
    pub priority: Option<String>,
    pub reporter: Option<String>,
}

/// Why a message could not be turned into an issue.
///
/// The display text is sent back to the channel verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Error: Invalid input format. Please provide an 'Issue', 'Priority', and 'Reporter'.")]
    InvalidFormat,
    #[error("Error: 'issue' field is missing. Please provide an 'issue' in your message.")]
    MissingIssue,
    #[error("Error: 'priority' field is missing. Please provide a 'priority' in your message.")]
    MissingPriority,
    #[error("Error: 'reporter' field is missing. Please provide a 'reporter' in your message.")]
    MissingReporter,
}

/// Scans `text` for recognized `key: value` lines.
pub fn parse_fields(text: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();

    for line in text.trim().split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let value = value.trim().to_string();

        match key.trim().to_lowercase().as_str() {
            "issue" => fields.issue = Some(value),
            "priority" => fields.priority = Some(value),
            "reporter" => fields.reporter = Some(value),
            _ => {}
        }
    }

    fields
}

impl ParsedFields {
    /// Checks the fields in order: nothing at all, then issue, priority, reporter.
    ///
    /// A field given with an empty value counts as missing.
    pub fn validate(self) -> Result<IssueFields, FieldError> {
        if self.issue.is_none() && self.priority.is_none() && self.reporter.is_none() {
            return Err(FieldError::InvalidFormat);
        }

        let summary = self.issue.filter(|v| !v.is_empty()).ok_or(FieldError::MissingIssue)?;
        let priority = self.priority.filter(|v| !v.is_empty()).ok_or(FieldError::MissingPriority)?;
        let reporter = self.reporter.filter(|v| !v.is_empty()).ok_or(FieldError::MissingReporter)?;

        Ok(IssueFields { summary, priority, reporter })
    }
}

/// Parses and validates in one step.
pub fn extract_issue_fields(text: &str) -> Result<IssueFields, FieldError> {
    parse_fields(text).validate()
}

// Tests.
