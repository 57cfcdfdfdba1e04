//! Glamquest Game Engine
//!
//! Platform-agnostic core logic for the Glamquest party adventure.
//! This crate provides bounded statistics, combat, and data-driven
//! encounter resolution without any UI or platform-specific dependencies.

pub mod constants;
pub mod data;
pub mod encounters;
pub mod party;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use data::{EventData, EventDataError, EventDef, OutcomeText, Strictness};
pub use encounters::{EventPool, EventStatus, Resolution, resolve_event};
pub use party::{AttackOutcome, Character, Combatant, DamageOutcome, Enemy, StatEntry};
pub use session::{BrawlReport, GameSession, GlamourAward, SessionState};
pub use stats::{StatKind, Statistic};

/// Trait for abstracting event data loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load event data from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the event data cannot be loaded.
    fn load_event_data(&self) -> Result<EventData, Self::Error>;
}

/// Main entry point wiring loaded event data into fresh sessions.
pub struct GameEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> GameEngine<L>
where
    L: DataLoader,
{
    /// Create a new game engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Create a session with the stock party and the loaded events.
    ///
    /// # Errors
    ///
    /// Load failures abort session creation, as do unknown attribute
    /// keys under [`Strictness::Strict`] and an event file with no
    /// events. All of these are fatal at startup.
    pub fn create_session(
        &self,
        seed: u64,
        strictness: Strictness,
    ) -> Result<GameSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let data = self.data_loader.load_event_data().map_err(Into::into)?;
        if strictness == Strictness::Strict {
            data.validate_attributes()?;
        }
        let pool = EventPool::new(data.events)?;
        Ok(GameSession::new(
            Character::default_party(),
            vec![pool],
            seed,
        ))
    }
}
