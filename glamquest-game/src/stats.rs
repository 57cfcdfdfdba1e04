//! Bounded statistics and the closed set of player-selectable attributes.

use std::fmt;

use crate::constants::{STAT_MAX, STAT_MIN};

/// Integer attribute clamped to an inclusive `[min, max]` range.
///
/// The bounds invariant holds for the whole lifetime of the value: the
/// starting value is clamped at construction and every later mutation
/// re-clamps. Out-of-range deltas are absorbed silently rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    name: String,
    value: i32,
    min: i32,
    max: i32,
    description: String,
}

impl Statistic {
    /// Construct a statistic, clamping the starting value into range.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: i32,
        min: i32,
        max: i32,
        description: impl Into<String>,
    ) -> Self {
        debug_assert!(min <= max, "statistic bounds inverted");
        Self {
            name: name.into(),
            value: value.clamp(min, max),
            min,
            max,
            description: description.into(),
        }
    }

    /// Standard `0..=100` gauge used for health, strength, and intelligence.
    #[must_use]
    pub fn gauge(name: impl Into<String>, value: i32, description: impl Into<String>) -> Self {
        Self::new(name, value, STAT_MIN, STAT_MAX, description)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Apply a delta, clamping the result back into range.
    pub fn modify(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
    }

    /// Whether the value sits at its lower bound.
    #[must_use]
    pub const fn is_at_floor(&self) -> bool {
        self.value == self.min
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Player-selectable attribute kinds, in fixed selection order.
///
/// Event data refers to attributes by their free-text display name; this
/// enumeration is the closed set those names are checked against under
/// strict loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Strength,
    Intelligence,
    GlamourPoints,
}

impl StatKind {
    /// Selection order presented to the player.
    pub const CHOICES: [Self; 3] = [Self::Strength, Self::Intelligence, Self::GlamourPoints];

    /// Canonical attribute key, as it appears in event data.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::GlamourPoints => "Glamour Points",
        }
    }

    /// Parse a free-text attribute key back into a kind.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .copied()
            .find(|kind| kind.display_name() == name)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
