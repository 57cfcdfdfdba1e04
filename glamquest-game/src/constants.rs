//! Centralized balance and tuning constants for Glamquest game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Statistic bounds ---------------------------------------------------------
pub(crate) const STAT_MIN: i32 = 0;
pub(crate) const STAT_MAX: i32 = 100;
pub(crate) const CHARACTER_STARTING_HEALTH: i32 = 100;

// Party composition --------------------------------------------------------
pub(crate) const PARTY_SIZE: usize = 3;

// Stock brawl enemy --------------------------------------------------------
pub(crate) const BRAWL_ENEMY_NAME: &str = "Glamazon";
pub(crate) const BRAWL_ENEMY_HEALTH: i32 = 80;
pub(crate) const BRAWL_ENEMY_STRENGTH: i32 = 15;
