//! Event sources feeding the battle engine.
//!
//! The engine only ever asks an `EventSource` for the next event. Two
//! sources are provided:
//!
//! - `TimedEvents`: the real thing. Wall-clock regeneration and opponent
//!   intervals raced against lines from an input channel with
//!   `tokio::select!`.
//! - `ScriptedEvents`: a fixed sequence with synthetic timestamps, so the
//!   engine's transitions can be tested without real timers.
//!
//! Lines come from `spawn_line_reader`, a blocking reader on its own thread.
//! It only ever sends owned strings; it never sees battle state.

use std::collections::VecDeque;
use std::io::BufRead;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::core::BattleConfig;

/// Something the engine reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// The player gave up.
    Surrender,
    /// A raw line typed by the player.
    Input(String),
    /// Elixir regeneration tick.
    RegenTick,
    /// Opponent-action tick.
    OpponentTick,
}

impl BattleEvent {
    /// Classify an input line: the surrender token or a selection.
    #[must_use]
    pub fn from_line(line: &str, surrender_token: &str) -> Self {
        let line = line.trim();
        if line == surrender_token {
            BattleEvent::Surrender
        } else {
            BattleEvent::Input(line.to_string())
        }
    }
}

/// Supplies events to the engine, one at a time, in delivery order.
#[async_trait]
pub trait EventSource: Send {
    /// Wait for the next event.
    ///
    /// Returns `None` once no event can ever arrive again.
    async fn next_event(&mut self) -> Option<BattleEvent>;

    /// Time since the battle started, as seen by this source.
    fn elapsed(&self) -> Duration;

    /// Stop all timers. Nothing is delivered afterwards.
    fn stop(&mut self);
}

/// A pre-recorded event sequence with synthetic timestamps.
///
/// ```
/// use std::time::Duration;
/// use clash_sim::engine::{BattleEvent, ScriptedEvents};
///
/// let events = ScriptedEvents::new()
///     .then(BattleEvent::Input("1".into()))
///     .at(Duration::from_secs(5), BattleEvent::OpponentTick);
///
/// assert_eq!(events.remaining(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<(Duration, BattleEvent)>,
    now: Duration,
    last_scheduled: Duration,
    stopped: bool,
}

impl ScriptedEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `at`. Times never go backwards: an earlier time is
    /// bumped to the latest time scheduled so far.
    pub fn push(&mut self, at: Duration, event: BattleEvent) {
        let at = at.max(self.last_scheduled);
        self.last_scheduled = at;
        self.queue.push_back((at, event));
    }

    /// Schedule `event` at `at`.
    #[must_use]
    pub fn at(mut self, at: Duration, event: BattleEvent) -> Self {
        self.push(at, event);
        self
    }

    /// Schedule `event` at the same time as the previous one.
    #[must_use]
    pub fn then(mut self, event: BattleEvent) -> Self {
        let at = self.last_scheduled;
        self.push(at, event);
        self
    }

    /// Schedule a player input line at the same time as the previous event.
    #[must_use]
    pub fn input(self, line: &str) -> Self {
        self.then(BattleEvent::Input(line.to_string()))
    }

    /// Events not delivered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

#[async_trait]
impl EventSource for ScriptedEvents {
    async fn next_event(&mut self) -> Option<BattleEvent> {
        if self.stopped {
            return None;
        }
        let (at, event) = self.queue.pop_front()?;
        self.now = at;
        Some(event)
    }

    fn elapsed(&self) -> Duration {
        self.now
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Wall-clock event source: two intervals and the input channel.
///
/// Ticks keep firing whether or not the player types anything. If the
/// input channel closes, the battle carries on with timers only.
#[derive(Debug)]
pub struct TimedEvents {
    input: mpsc::Receiver<String>,
    input_open: bool,
    surrender_token: String,
    regen: Option<Interval>,
    opponent: Option<Interval>,
    started: Instant,
}

impl TimedEvents {
    /// Start the clock and both timers. The first ticks fire one period
    /// after creation.
    #[must_use]
    pub fn new(input: mpsc::Receiver<String>, config: &BattleConfig) -> Self {
        let started = Instant::now();
        Self {
            input,
            input_open: true,
            surrender_token: config.surrender_token.clone(),
            regen: Some(ticker(started, config.regen_period)),
            opponent: Some(ticker(started, config.opponent_period)),
            started,
        }
    }

    /// Give the input channel back, e.g. to reuse it for menu prompts.
    #[must_use]
    pub fn into_input(self) -> mpsc::Receiver<String> {
        self.input
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.regen.is_none() && self.opponent.is_none()
    }
}

fn ticker(start: Instant, period: Duration) -> Interval {
    // interval_at panics on a zero period
    let period = period.max(Duration::from_millis(1));
    let mut interval = time::interval_at(start + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[async_trait]
impl EventSource for TimedEvents {
    async fn next_event(&mut self) -> Option<BattleEvent> {
        loop {
            let (Some(regen), Some(opponent)) = (self.regen.as_mut(), self.opponent.as_mut()) else {
                return None;
            };

            tokio::select! {
                line = self.input.recv(), if self.input_open => match line {
                    Some(line) => return Some(BattleEvent::from_line(&line, &self.surrender_token)),
                    None => {
                        debug!("input channel closed, continuing on timers only");
                        self.input_open = false;
                    }
                },
                _ = regen.tick() => return Some(BattleEvent::RegenTick),
                _ = opponent.tick() => return Some(BattleEvent::OpponentTick),
            }
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn stop(&mut self) {
        self.regen = None;
        self.opponent = None;
    }
}

/// Read lines on a dedicated thread and deliver them, trimmed, over a
/// channel.
///
/// Blocking reads never stall the async side. The thread exits at end of
/// input, on a read error, or when the receiver is dropped.
pub fn spawn_line_reader<R>(reader: R, capacity: usize) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));

    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line.trim().to_string()).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(%err, "failed to read input line");
                    break;
                }
            }
        }
        debug!("line reader finished");
    });

    rx
}
