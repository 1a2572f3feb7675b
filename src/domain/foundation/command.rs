//! Per-request context handed to application handlers.
//!
//! `CommandMetadata` names the acting user and the correlation id that ties
//! the handler's log lines to the HTTP request that triggered them.

use uuid::Uuid;

use super::UserId;

/// Acting user plus request correlation data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub user_id: UserId,
    correlation_id: String,
    source: Option<String>,
}

impl CommandMetadata {
    /// Starts metadata for `user_id` with a freshly generated correlation id.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Replaces the generated correlation id, e.g. with an inbound request id.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Tags where the command came from ("http", "test").
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    pub fn test_fixture() -> Self {
        Self::new(UserId::new("test-user-123").unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}
