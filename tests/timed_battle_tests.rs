//! Whole battles on the wall-clock event source.
//!
//! Tokio's paused clock auto-advances to the next timer whenever the
//! runtime is idle, so a three-minute battle finishes instantly.

use std::time::Duration;

use tokio::sync::mpsc;

use clash_sim::cards::{Card, CardCatalog, CardStats, Deck};
use clash_sim::core::{BattleConfig, BattleRng};
use clash_sim::engine::{Battle, OpponentProfile, TimedEvents};
use clash_sim::rules::BattleOutcome;

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    catalog.insert("Spark", CardStats::new(3, 20, 0, 0.0));
    catalog.insert("Meteor", CardStats::new(1, 5000, 0, 0.0));
    catalog
}

fn deck(name: &str) -> Deck {
    [Card::new(name, 1)].into_iter().collect()
}

fn battle<'c>(catalog: &'c CardCatalog, card: &str) -> Battle<'c> {
    Battle::new(
        BattleConfig::default().without_tower_crits(),
        catalog,
        deck(card),
        OpponentProfile::new("Rival", Some(deck("Spark"))),
        BattleRng::new(17),
    )
}

/// Test that an idle battle runs into the time limit.
#[tokio::test(start_paused = true)]
async fn test_idle_battle_is_a_draw() {
    let catalog = catalog();
    let (_tx, rx) = mpsc::channel::<String>(8);
    let mut events = TimedEvents::new(rx, &BattleConfig::default());

    let report = battle(&catalog, "Spark").run(&mut events, &mut ()).await;

    assert_eq!(report.outcome, BattleOutcome::Draw);
    assert!(report.elapsed > Duration::from_secs(180));
    assert!(report.elapsed < Duration::from_secs(182));
    assert!(events.is_stopped());

    // the opponent played every five seconds
    let plays = report.replay.texts().filter(|t| t.starts_with("Rival used ")).count();
    assert_eq!(plays, 36);
    assert_eq!(report.replay.last().unwrap().text, "Match ended in a draw");
}

/// Test that the surrender token ends the battle before any tick.
#[tokio::test(start_paused = true)]
async fn test_surrender_line() {
    let catalog = catalog();
    let (tx, rx) = mpsc::channel::<String>(8);
    tx.send("0".into()).await.unwrap();
    let mut events = TimedEvents::new(rx, &BattleConfig::default());

    let report = battle(&catalog, "Spark").run(&mut events, &mut ()).await;

    assert_eq!(report.outcome, BattleOutcome::Surrender);
    assert_eq!(report.elapsed, Duration::ZERO);
    let texts: Vec<_> = report.replay.texts().collect();
    assert_eq!(texts, vec!["Player surrendered"]);
}

/// Test that typed selections are resolved between ticks.
#[tokio::test(start_paused = true)]
async fn test_player_wins_on_input() {
    let catalog = catalog();
    let (tx, rx) = mpsc::channel::<String>(8);
    for _ in 0..3 {
        tx.send("1".into()).await.unwrap();
    }
    let mut events = TimedEvents::new(rx, &BattleConfig::default());

    let report = battle(&catalog, "Meteor").run(&mut events, &mut ()).await;

    assert_eq!(report.outcome, BattleOutcome::PlayerWin);
    assert_eq!(report.replay.len(), 4);
    assert_eq!(report.state.player.elixir(), 7.0);
}

/// Test that lines left over after a battle stay readable for the next prompt.
#[tokio::test(start_paused = true)]
async fn test_input_channel_outlives_battle() {
    let catalog = catalog();
    let (tx, rx) = mpsc::channel::<String>(8);
    tx.send("0".into()).await.unwrap();
    tx.send("y".into()).await.unwrap();
    let mut events = TimedEvents::new(rx, &BattleConfig::default());

    let report = battle(&catalog, "Spark").run(&mut events, &mut ()).await;
    assert_eq!(report.outcome, BattleOutcome::Surrender);

    let mut lines = events.into_input();
    assert_eq!(lines.recv().await.as_deref(), Some("y"));
}
