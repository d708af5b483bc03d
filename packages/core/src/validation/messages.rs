//! Validation message lists.
//!
//! Messages communicate model status to developers and content authors.
//! Each list keeps first-seen order and silently drops duplicates, so
//! re-running validation never double-inserts.

use std::collections::HashSet;

use serde::Serialize;

use crate::validation::MessageLevel;

/// Ordered message set: insertion order preserved, duplicates dropped.
///
/// Membership is tracked in a side index instead of re-scanning the list on
/// every insert.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MessageList {
    messages: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl MessageList {
    /// Append `message` unless it is already present.
    ///
    /// Returns whether the message was added.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !self.seen.insert(message.clone()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Messages in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.messages
    }

    /// Whether `message` has been recorded.
    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    /// Number of distinct messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The three message lists carried by every model.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationMessages {
    errors: MessageList,
    warnings: MessageList,
    infos: MessageList,
}

impl ValidationMessages {
    /// Record a message on the list matching `level`.
    pub fn record(&mut self, level: MessageLevel, message: impl Into<String>) {
        match level {
            MessageLevel::Error => self.errors.push(message),
            MessageLevel::Warning => self.warnings.push(message),
            MessageLevel::Info => self.infos.push(message),
        };
    }

    /// Append an error message. Duplicates are dropped.
    pub fn add_error_message(&mut self, message: impl Into<String>) {
        self.errors.push(message);
    }

    /// Append a warning message. Duplicates are dropped.
    pub fn add_warning_message(&mut self, message: impl Into<String>) {
        self.warnings.push(message);
    }

    /// Append an info message. Duplicates are dropped.
    pub fn add_info_message(&mut self, message: impl Into<String>) {
        self.infos.push(message);
    }

    /// Error messages in first-seen order.
    pub fn error_messages(&self) -> &[String] {
        self.errors.as_slice()
    }

    /// Warning messages in first-seen order.
    pub fn warning_messages(&self) -> &[String] {
        self.warnings.as_slice()
    }

    /// Info messages in first-seen order.
    pub fn info_messages(&self) -> &[String] {
        self.infos.as_slice()
    }
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;
