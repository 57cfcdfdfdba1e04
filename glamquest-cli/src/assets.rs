//! Event data loading: embedded defaults plus filesystem overrides.

use std::fs;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use glamquest_game::{DataLoader, EventData, EventDataError};

const DEFAULT_EVENTS: &str = include_str!("../data/events.json");

/// Errors raised while sourcing event data.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read event file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] EventDataError),
}

/// Loads event data from an optional file path, falling back to the
/// records embedded in the binary.
pub struct EventAssets {
    events_path: Option<PathBuf>,
}

impl EventAssets {
    pub const fn new(events_path: Option<PathBuf>) -> Self {
        Self { events_path }
    }
}

impl DataLoader for EventAssets {
    type Error = AssetError;

    fn load_event_data(&self) -> Result<EventData, Self::Error> {
        let data = match &self.events_path {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                let data = EventData::from_json(&json)?;
                info!("loaded {} events from {}", data.events.len(), path.display());
                data
            }
            None => {
                let data = EventData::from_json(DEFAULT_EVENTS)?;
                info!("loaded {} embedded events", data.events.len());
                data
            }
        };
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_events_parse_and_validate_strictly() {
        let data = EventAssets::new(None)
            .load_event_data()
            .expect("embedded data loads");
        assert!(!data.events.is_empty());
        assert!(
            data.validate_attributes().is_ok(),
            "shipped events must only use known attributes"
        );
    }

    #[test]
    fn missing_override_file_is_an_io_error() {
        let loader = EventAssets::new(Some(PathBuf::from("no/such/events.json")));
        assert!(matches!(loader.load_event_data(), Err(AssetError::Io(_))));
    }
}
