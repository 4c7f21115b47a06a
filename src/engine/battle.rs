//! The battle engine.
//!
//! A `Battle` owns the combat state for one battle and reacts to events
//! from an `EventSource`:
//!
//! - **Surrender**: record it and end the battle.
//! - **Input**: parse a 1-based deck selection, pay the card's exact cost,
//!   roll damage against the opponent and apply it.
//! - **Regen tick**: both sides regenerate elixir.
//! - **Opponent tick**: ask the `OpponentPolicy` for a play against the
//!   player; a play costs a flat `opponent_play_cost`.
//!
//! After every event the time limit is checked. A battle always ends in
//! exactly one `BattleOutcome`, recorded as the last replay entry, and the
//! source's timers are stopped before `run` returns.
//!
//! Rejected input (bad selection, not enough elixir) is reported to the
//! `BattleView` and changes nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::events::{BattleEvent, EventSource};
use super::replay::ReplayLog;
use crate::cards::{CardCatalog, Deck};
use crate::core::{BattleConfig, BattleRng, BattleState, Combatant};
use crate::policy::{OpponentPolicy, RandomOpponent};
use crate::rules::{compute_damage, BattleOutcome};

/// What the engine needs to know about the opponent.
///
/// When `deck` is `None` the opponent plays with a copy of the player's
/// deck. That is a deliberate simplification for opponents whose deck is
/// unknown, not a bug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub name: String,
    pub deck: Option<Deck>,
}

impl OpponentProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Option<Deck>) -> Self {
        Self {
            name: name.into(),
            deck,
        }
    }
}

/// Things worth telling the player that are not replay entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Notice {
    /// The input was not a number in `1..=deck_size`.
    InvalidChoice { input: String, deck_size: usize },
    /// The selected card costs more than the player has.
    NotEnoughElixir { card: String, cost: u32, available: f64 },
    /// A play was resolved; `text` is the replay entry.
    Played { by: Combatant, text: String },
    /// The opponent passed its turn.
    OpponentSkipped { text: String },
    /// The battle is over.
    Finished { outcome: BattleOutcome },
}

/// Observer for notices and state refreshes. Both default to no-ops.
pub trait BattleView {
    fn notice(&mut self, _notice: &Notice) {}

    fn status(&mut self, _state: &BattleState) {}
}

impl BattleView for () {}

/// Everything a finished battle hands back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub replay: ReplayLog,
    /// Combat state at the moment the battle ended.
    pub state: BattleState,
    /// Battle time of the final event.
    pub elapsed: Duration,
    /// Seed of the battle RNG, enough to replay the rolls.
    pub seed: u64,
}

/// One battle between the player and an automated opponent.
pub struct Battle<'c, P = RandomOpponent> {
    config: BattleConfig,
    catalog: &'c CardCatalog,
    policy: P,
    rng: BattleRng,
    state: BattleState,
    player_deck: Deck,
    opponent_name: String,
    opponent_deck: Deck,
    replay: ReplayLog,
    now: Duration,
}

impl<'c> Battle<'c, RandomOpponent> {
    /// Set up a battle with full towers, starting elixir and an empty log.
    #[must_use]
    pub fn new(
        config: BattleConfig,
        catalog: &'c CardCatalog,
        player_deck: Deck,
        opponent: OpponentProfile,
        rng: BattleRng,
    ) -> Self {
        let opponent_deck = match opponent.deck {
            Some(deck) => deck,
            None => {
                debug!(opponent = %opponent.name, "no opponent deck, mirroring the player's deck");
                player_deck.clone()
            }
        };

        Self {
            state: BattleState::new(&config),
            config,
            catalog,
            policy: RandomOpponent::default(),
            rng,
            player_deck,
            opponent_name: opponent.name,
            opponent_deck,
            replay: ReplayLog::new(),
            now: Duration::ZERO,
        }
    }
}

impl<'c, P: OpponentPolicy> Battle<'c, P> {
    /// Swap in a different opponent policy.
    #[must_use]
    pub fn with_policy<Q: OpponentPolicy>(self, policy: Q) -> Battle<'c, Q> {
        Battle {
            config: self.config,
            catalog: self.catalog,
            policy,
            rng: self.rng,
            state: self.state,
            player_deck: self.player_deck,
            opponent_name: self.opponent_name,
            opponent_deck: self.opponent_deck,
            replay: self.replay,
            now: self.now,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Mutable access to the combat state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut BattleState {
        &mut self.state
    }

    #[must_use]
    pub fn replay(&self) -> &ReplayLog {
        &self.replay
    }

    #[must_use]
    pub fn player_deck(&self) -> &Deck {
        &self.player_deck
    }

    #[must_use]
    pub fn opponent_name(&self) -> &str {
        &self.opponent_name
    }

    #[must_use]
    pub fn opponent_deck(&self) -> &Deck {
        &self.opponent_deck
    }

    /// Drive the battle to completion.
    pub async fn run<S, V>(mut self, events: &mut S, view: &mut V) -> BattleReport
    where
        S: EventSource + ?Sized,
        V: BattleView + ?Sized,
    {
        info!(
            opponent = %self.opponent_name,
            seed = self.rng.seed(),
            "battle started"
        );
        view.status(&self.state);

        let outcome = loop {
            let Some(event) = events.next_event().await else {
                warn!("event source exhausted, ending the battle as a draw");
                self.now = events.elapsed();
                break self.finish(BattleOutcome::Draw);
            };

            let at = events.elapsed();
            if let Some(outcome) = self.handle_event(event, at, view) {
                break outcome;
            }
            if let Some(outcome) = self.check_time_limit(at) {
                break outcome;
            }
        };

        events.stop();
        view.notice(&Notice::Finished { outcome });
        info!(%outcome, entries = self.replay.len(), "battle finished");

        BattleReport {
            outcome,
            replay: self.replay,
            state: self.state,
            elapsed: self.now,
            seed: self.rng.seed(),
        }
    }

    /// Process one event to completion at battle time `at`.
    ///
    /// Returns the outcome if the event ended the battle. The terminal
    /// replay entry has already been recorded in that case.
    pub fn handle_event<V>(&mut self, event: BattleEvent, at: Duration, view: &mut V) -> Option<BattleOutcome>
    where
        V: BattleView + ?Sized,
    {
        self.now = at;
        debug!(?event, at = ?at, "handling event");

        match event {
            BattleEvent::Surrender => Some(self.finish(BattleOutcome::Surrender)),
            BattleEvent::Input(line) => self.play_card(&line, view),
            BattleEvent::RegenTick => {
                self.state.regenerate(Combatant::Player);
                self.state.regenerate(Combatant::Opponent);
                view.status(&self.state);
                None
            }
            BattleEvent::OpponentTick => self.opponent_turn(view),
        }
    }

    /// End the battle as a draw if `elapsed` is past the time limit.
    pub fn check_time_limit(&mut self, elapsed: Duration) -> Option<BattleOutcome> {
        if elapsed > self.config.time_limit {
            self.now = elapsed;
            Some(self.finish(BattleOutcome::Draw))
        } else {
            None
        }
    }

    fn play_card<V>(&mut self, input: &str, view: &mut V) -> Option<BattleOutcome>
    where
        V: BattleView + ?Sized,
    {
        let deck_size = self.player_deck.len();
        let index = match input.trim().parse::<usize>() {
            Ok(n) if (1..=deck_size).contains(&n) => n - 1,
            _ => {
                debug!(input, "invalid card selection");
                view.notice(&Notice::InvalidChoice {
                    input: input.to_string(),
                    deck_size,
                });
                return None;
            }
        };

        let card = self.player_deck[index].clone();
        let stats = self.catalog.lookup(&card.name);

        if !self.state.spend(Combatant::Player, stats.cost()) {
            debug!(card = %card.name, cost = stats.elixir_cost, "not enough elixir");
            view.notice(&Notice::NotEnoughElixir {
                card: card.name.clone(),
                cost: stats.elixir_cost,
                available: self.state.player.elixir(),
            });
            return None;
        }

        let roll = compute_damage(&card, &stats, &self.state.opponent, &mut self.rng);
        let hit = self.state.apply_damage(Combatant::Opponent, roll.damage);
        let text = format!(
            "Player used {} dealing {} damage to {}{}",
            card,
            roll.damage,
            hit,
            roll.annotation()
        );

        self.replay.record(self.now, text.clone());
        view.notice(&Notice::Played {
            by: Combatant::Player,
            text,
        });
        view.status(&self.state);

        if self.state.is_king_tower_down(Combatant::Opponent) {
            return Some(self.finish(BattleOutcome::PlayerWin));
        }
        None
    }

    fn opponent_turn<V>(&mut self, view: &mut V) -> Option<BattleOutcome>
    where
        V: BattleView + ?Sized,
    {
        if self.state.is_king_tower_down(Combatant::Player) {
            return None;
        }

        let mv = self.policy.decide_and_act(
            &self.opponent_deck,
            self.state.opponent.elixir(),
            &self.opponent_name,
            &self.state.player,
            self.catalog,
            &mut self.rng,
        );

        if mv.is_skip() {
            debug!(opponent = %self.opponent_name, "opponent skipped");
            view.notice(&Notice::OpponentSkipped {
                text: mv.description,
            });
            return None;
        }

        let hit = self.state.apply_damage(Combatant::Player, mv.damage);
        // flat cost regardless of the card played
        let remaining = self.state.opponent.elixir() - self.config.opponent_play_cost;
        self.state.opponent.set_elixir(remaining);

        let text = format!("{} to {}{}", mv.description, hit, mv.roll().annotation());
        self.replay.record(self.now, text.clone());
        view.notice(&Notice::Played {
            by: Combatant::Opponent,
            text,
        });
        view.status(&self.state);

        if self.state.is_king_tower_down(Combatant::Player) {
            return Some(self.finish(BattleOutcome::OpponentWin));
        }
        None
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleOutcome {
        self.replay.record(self.now, outcome.log_line());
        outcome
    }
}
