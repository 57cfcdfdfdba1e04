//! Party members, enemies, and the shared combat contract.

use crate::constants::{CHARACTER_STARTING_HEALTH, PARTY_SIZE};
use crate::stats::{StatKind, Statistic};

/// Outcome of a single application of damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    pub amount: i32,
    pub remaining: i32,
    pub defeated: bool,
}

/// Shared combat surface for anything that can soak damage.
pub trait Combatant {
    fn display_name(&self) -> &str;

    fn health(&self) -> &Statistic;

    /// Apply damage to health and report the result. `defeated` is set
    /// iff the remaining health lands on its floor.
    fn take_damage(&mut self, amount: i32) -> DamageOutcome;

    fn is_defeated(&self) -> bool {
        self.health().is_at_floor()
    }
}

fn apply_damage(health: &mut Statistic, amount: i32) -> DamageOutcome {
    health.modify(amount.saturating_neg());
    DamageOutcome {
        amount,
        remaining: health.value(),
        defeated: health.is_at_floor(),
    }
}

/// A party member with bounded gauges and an unbounded glamour tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    health: Statistic,
    strength: Statistic,
    intelligence: Statistic,
    glamour_points: u32,
}

impl Character {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Statistic::gauge(
                "Health",
                CHARACTER_STARTING_HEALTH,
                "Tracks remaining health",
            ),
            strength: Statistic::gauge("Strength", 0, "A measure of physical power"),
            intelligence: Statistic::gauge("Intelligence", 0, "Sparkling genius"),
            glamour_points: 0,
        }
    }

    /// The stock party of freshly initialized members.
    #[must_use]
    pub fn default_party() -> Vec<Self> {
        (1..=PARTY_SIZE)
            .map(|i| Self::new(format!("Adventurer {i}")))
            .collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn strength(&self) -> &Statistic {
        &self.strength
    }

    #[must_use]
    pub const fn intelligence(&self) -> &Statistic {
        &self.intelligence
    }

    #[must_use]
    pub const fn glamour_points(&self) -> u32 {
        self.glamour_points
    }

    /// Add to the glamour tally, returning the new total. Glamour is an
    /// open-ended accumulator and never clamps.
    pub fn gain_glamour(&mut self, amount: u32) -> u32 {
        self.glamour_points = self.glamour_points.saturating_add(amount);
        self.glamour_points
    }

    /// Name/value views over the selectable attributes, in the order
    /// they are presented for selection.
    #[must_use]
    pub fn stat_entries(&self) -> [StatEntry; 3] {
        [
            StatEntry {
                kind: StatKind::Strength,
                value: i64::from(self.strength.value()),
            },
            StatEntry {
                kind: StatKind::Intelligence,
                value: i64::from(self.intelligence.value()),
            },
            StatEntry {
                kind: StatKind::GlamourPoints,
                value: i64::from(self.glamour_points),
            },
        ]
    }
}

impl Combatant for Character {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Statistic {
        &self.health
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        apply_damage(&mut self.health, amount)
    }
}

/// Name/value view over one selectable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEntry {
    pub kind: StatKind,
    pub value: i64,
}

impl StatEntry {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// A combat-only adversary, created per brawl and discarded after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    health: Statistic,
    strength: Statistic,
}

impl Enemy {
    #[must_use]
    pub fn new(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Self {
            name: name.into(),
            health: Statistic::gauge("Health", health, "Enemy's health"),
            strength: Statistic::gauge("Strength", strength, "Enemy's strength"),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn strength(&self) -> &Statistic {
        &self.strength
    }

    /// Strike a target for the attacker's current strength value.
    ///
    /// Damage is deterministic per attack; only event selection is
    /// randomized. A zero-strength attacker still lands the attack, for
    /// zero damage.
    pub fn attack<C: Combatant + ?Sized>(&self, target: &mut C) -> AttackOutcome {
        let damage = target.take_damage(self.strength.value());
        AttackOutcome {
            attacker: self.name.clone(),
            target: target.display_name().to_string(),
            damage,
        }
    }
}

impl Combatant for Enemy {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Statistic {
        &self.health
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        apply_damage(&mut self.health, amount)
    }
}

/// One enemy strike against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: String,
    pub target: String,
    pub damage: DamageOutcome,
}
