//! Event records and their JSON wire format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::StatKind;

/// Message attached to one resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeText {
    pub message: String,
}

/// One narrative decision point, immutable once loaded.
///
/// Attribute keys are free text matched against statistic names at
/// resolution time. Under [`Strictness::Strict`] they are validated
/// against the closed attribute set when the data is loaded instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    pub primary_attribute: String,
    pub secondary_attribute: String,
    pub prompt_text: String,
    pub pass: OutcomeText,
    pub fail: OutcomeText,
    pub partial_pass: OutcomeText,
}

/// How unknown attribute keys in event data are treated at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Unknown keys load fine and resolve as a fail at play time.
    #[default]
    Lenient,
    /// Unknown keys are rejected when the data is loaded.
    Strict,
}

/// Errors raised while loading or validating event data.
#[derive(Debug, Error)]
pub enum EventDataError {
    #[error("event data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event {index} references unknown attribute {attribute:?}")]
    UnknownAttribute { index: usize, attribute: String },
    #[error("event data contains no events")]
    NoEvents,
}

/// Container for all loaded event definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventData {
    pub events: Vec<EventDef>,
}

impl EventData {
    /// Create empty event data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Parse event data from a JSON array of event records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed; a missing required
    /// field is fatal, never defaulted.
    pub fn from_json(json: &str) -> Result<Self, EventDataError> {
        let events: Vec<EventDef> = serde_json::from_str(json)?;
        Ok(Self { events })
    }

    /// Create event data from pre-parsed records
    #[must_use]
    pub fn from_events(events: Vec<EventDef>) -> Self {
        Self { events }
    }

    /// Check every attribute key against the closed attribute set.
    ///
    /// # Errors
    ///
    /// Reports the first key that does not name a known statistic, with
    /// the index of the offending event.
    pub fn validate_attributes(&self) -> Result<(), EventDataError> {
        for (index, event) in self.events.iter().enumerate() {
            for attribute in [&event.primary_attribute, &event.secondary_attribute] {
                if StatKind::parse(attribute).is_none() {
                    return Err(EventDataError::UnknownAttribute {
                        index,
                        attribute: attribute.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
