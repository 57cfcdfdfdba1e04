//! Event resolution and random pool draws.

use rand::Rng;

use crate::data::{EventDataError, EventDef};

/// Resolution state of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventStatus {
    /// No resolution has happened yet.
    #[default]
    Unknown,
    Pass,
    PartialPass,
    Fail,
}

/// Outcome of resolving one event against one chosen attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: EventStatus,
    pub message: String,
}

/// Decide pass / partial pass / fail for a chosen attribute name.
///
/// The tie-break is strictly top-down, first match wins: the primary
/// attribute passes, the secondary partially passes, everything else
/// fails. Wrong-actor picks and data typos land in the fail arm
/// identically; that fallthrough is game logic, not an error.
///
/// Exactly one of the event's three messages is produced per call, and
/// neither the event nor any actor is mutated.
#[must_use]
pub fn resolve_event(event: &EventDef, chosen_stat: &str) -> Resolution {
    if chosen_stat == event.primary_attribute {
        Resolution {
            status: EventStatus::Pass,
            message: event.pass.message.clone(),
        }
    } else if chosen_stat == event.secondary_attribute {
        Resolution {
            status: EventStatus::PartialPass,
            message: event.partial_pass.message.clone(),
        }
    } else {
        Resolution {
            status: EventStatus::Fail,
            message: event.fail.message.clone(),
        }
    }
}

/// Non-empty collection of events, drawn uniformly with replacement.
///
/// Immutable after construction; insertion order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPool {
    events: Vec<EventDef>,
}

impl EventPool {
    /// Build a pool from loaded event definitions.
    ///
    /// # Errors
    ///
    /// Rejects an empty event list; a pool must always be drawable.
    pub fn new(events: Vec<EventDef>) -> Result<Self, EventDataError> {
        if events.is_empty() {
            return Err(EventDataError::NoEvents);
        }
        Ok(Self { events })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn events(&self) -> &[EventDef] {
        &self.events
    }

    /// Draw one event uniformly at random. Consecutive draws may repeat.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &EventDef {
        let idx = rng.gen_range(0..self.events.len());
        &self.events[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OutcomeText;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn make_event(primary: &str, secondary: &str, prompt: &str) -> EventDef {
        EventDef {
            primary_attribute: primary.to_string(),
            secondary_attribute: secondary.to_string(),
            prompt_text: prompt.to_string(),
            pass: OutcomeText {
                message: format!("pass: {prompt}"),
            },
            fail: OutcomeText {
                message: format!("fail: {prompt}"),
            },
            partial_pass: OutcomeText {
                message: format!("partial: {prompt}"),
            },
        }
    }

    #[test]
    fn primary_match_passes() {
        let event = make_event("Strength", "Intelligence", "door");
        let resolution = resolve_event(&event, "Strength");
        assert_eq!(resolution.status, EventStatus::Pass);
        assert_eq!(resolution.message, "pass: door");
    }

    #[test]
    fn secondary_match_partially_passes() {
        let event = make_event("Strength", "Intelligence", "door");
        let resolution = resolve_event(&event, "Intelligence");
        assert_eq!(resolution.status, EventStatus::PartialPass);
        assert_eq!(resolution.message, "partial: door");
    }

    #[test]
    fn anything_else_fails() {
        let event = make_event("Strength", "Intelligence", "door");
        for name in ["Glamour Points", "Charisma", ""] {
            let resolution = resolve_event(&event, name);
            assert_eq!(resolution.status, EventStatus::Fail);
            assert_eq!(resolution.message, "fail: door");
        }
    }

    #[test]
    fn primary_wins_when_keys_collide() {
        // Same key on both slots: the top-down order must prefer primary.
        let event = make_event("Strength", "Strength", "door");
        let resolution = resolve_event(&event, "Strength");
        assert_eq!(resolution.status, EventStatus::Pass);
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(
            EventPool::new(Vec::new()),
            Err(EventDataError::NoEvents)
        ));
    }

    #[test]
    fn draw_returns_pool_members() {
        let events = vec![
            make_event("Strength", "Intelligence", "a"),
            make_event("Intelligence", "Glamour Points", "b"),
        ];
        let pool = EventPool::new(events.clone()).expect("non-empty pool");
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..50 {
            let drawn = pool.draw(&mut rng);
            assert!(events.contains(drawn));
        }
    }

    #[test]
    fn single_event_pool_repeats_on_consecutive_draws() {
        let pool =
            EventPool::new(vec![make_event("Strength", "Intelligence", "only")]).expect("pool");
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let first = pool.draw(&mut rng).clone();
        let second = pool.draw(&mut rng).clone();
        assert_eq!(first, second);
    }
}
