//! Session state machine binding the party to event pools and combat.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::constants::{BRAWL_ENEMY_HEALTH, BRAWL_ENEMY_NAME, BRAWL_ENEMY_STRENGTH, PARTY_SIZE};
use crate::data::EventDef;
use crate::encounters::EventPool;
use crate::party::{AttackOutcome, Character, Enemy};

/// Lifecycle of a play session. `Stopped` is terminal: no operation
/// re-enters `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Running,
    Stopped,
}

/// Glamour granted to one party member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlamourAward {
    pub member: String,
    pub gained: u32,
    pub total: u32,
}

/// Full account of one simulated brawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrawlReport {
    pub enemy: String,
    pub attacks: Vec<AttackOutcome>,
}

/// One play session: the party, the event pools, a seeded random
/// stream for draws, and the continuation state.
///
/// Party membership is fixed for the session's lifetime; defeated
/// members stay in the roster.
#[derive(Debug, Clone)]
pub struct GameSession {
    party: SmallVec<[Character; PARTY_SIZE]>,
    pools: Vec<EventPool>,
    current_pool: usize,
    rng: SmallRng,
    seed: u64,
    state: SessionState,
}

impl GameSession {
    /// Construct a session over a party and at least one event pool.
    ///
    /// # Panics
    ///
    /// An empty party or an empty pool list is a precondition violation
    /// and aborts.
    #[must_use]
    pub fn new(party: impl IntoIterator<Item = Character>, pools: Vec<EventPool>, seed: u64) -> Self {
        let party: SmallVec<[Character; PARTY_SIZE]> = party.into_iter().collect();
        assert!(!party.is_empty(), "session requires at least one party member");
        assert!(!pools.is_empty(), "session requires at least one event pool");
        Self {
            party,
            pools,
            current_pool: 0,
            rng: SmallRng::seed_from_u64(seed),
            seed,
            state: SessionState::Running,
        }
    }

    #[must_use]
    pub fn party(&self) -> &[Character] {
        &self.party
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running)
    }

    /// The session is over once the party is empty. Membership is fixed
    /// and defeat does not remove members, so ordinary play never trips
    /// this; the predicate exists for completeness.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.party.is_empty()
    }

    /// Move to `Stopped`. Terminal: every later mutating operation is a
    /// no-op.
    pub fn stop(&mut self) {
        self.state = SessionState::Stopped;
    }

    /// Grant glamour to every party member, reporting each new total.
    /// Returns nothing once the session is stopped.
    pub fn award_glamour(&mut self, amount: u32) -> Vec<GlamourAward> {
        if !self.is_running() {
            return Vec::new();
        }
        self.party
            .iter_mut()
            .map(|member| {
                let total = member.gain_glamour(amount);
                GlamourAward {
                    member: member.name().to_string(),
                    gained: amount,
                    total,
                }
            })
            .collect()
    }

    /// Run the stock brawl: a fresh enemy strikes each member once, then
    /// is discarded. Returns `None` once the session is stopped.
    pub fn simulate_brawl(&mut self) -> Option<BrawlReport> {
        if !self.is_running() {
            return None;
        }
        let enemy = Enemy::new(BRAWL_ENEMY_NAME, BRAWL_ENEMY_HEALTH, BRAWL_ENEMY_STRENGTH);
        let attacks = self
            .party
            .iter_mut()
            .map(|member| enemy.attack(member))
            .collect();
        Some(BrawlReport {
            enemy: enemy.name().to_string(),
            attacks,
        })
    }

    /// Draw an event from the current pool using the session stream.
    /// Returns `None` once the session is stopped.
    pub fn draw_event(&mut self) -> Option<EventDef> {
        if !self.is_running() {
            return None;
        }
        let pool = &self.pools[self.current_pool];
        Some(pool.draw(&mut self.rng).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EventDef, OutcomeText};
    use crate::party::Combatant;

    fn make_event(prompt: &str) -> EventDef {
        EventDef {
            primary_attribute: "Strength".to_string(),
            secondary_attribute: "Intelligence".to_string(),
            prompt_text: prompt.to_string(),
            pass: OutcomeText {
                message: "pass".to_string(),
            },
            fail: OutcomeText {
                message: "fail".to_string(),
            },
            partial_pass: OutcomeText {
                message: "partial".to_string(),
            },
        }
    }

    fn make_session(seed: u64) -> GameSession {
        let pool = EventPool::new(vec![make_event("a"), make_event("b")]).expect("pool");
        GameSession::new(Character::default_party(), vec![pool], seed)
    }

    #[test]
    fn brawl_damages_every_member() {
        let mut session = make_session(7);
        let report = session.simulate_brawl().expect("session running");
        assert_eq!(report.enemy, "Glamazon");
        assert_eq!(report.attacks.len(), session.party().len());
        for (attack, member) in report.attacks.iter().zip(session.party()) {
            assert_eq!(attack.damage.amount, 15);
            assert_eq!(attack.damage.remaining, 85);
            assert_eq!(member.health().value(), 85);
            assert!(!attack.damage.defeated);
        }
    }

    #[test]
    fn glamour_awards_cover_the_party() {
        let mut session = make_session(7);
        let awards = session.award_glamour(20);
        assert_eq!(awards.len(), 3);
        let awards = session.award_glamour(5);
        assert!(awards.iter().all(|award| award.total == 25));
    }

    #[test]
    fn stop_is_terminal() {
        let mut session = make_session(7);
        session.stop();
        assert_eq!(session.state(), SessionState::Stopped);
        assert!(!session.is_running());
        assert!(session.simulate_brawl().is_none());
        assert!(session.draw_event().is_none());
        assert!(session.award_glamour(10).is_empty());
        assert_eq!(session.party()[0].glamour_points(), 0);
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn sessions_with_equal_seeds_draw_identically() {
        let mut first = make_session(0xBEEF);
        let mut second = make_session(0xBEEF);
        for _ in 0..20 {
            assert_eq!(first.draw_event(), second.draw_event());
        }
    }

    #[test]
    fn session_is_not_over_while_party_stands() {
        let mut session = make_session(7);
        assert!(!session.is_over());
        // Even a wiped-out party stays in the roster.
        for _ in 0..10 {
            session.simulate_brawl();
        }
        assert!(session.party().iter().all(Combatant::is_defeated));
        assert!(!session.is_over());
    }

    #[test]
    #[should_panic(expected = "at least one event pool")]
    fn session_requires_a_pool() {
        let _ = GameSession::new(Character::default_party(), Vec::new(), 1);
    }
}
