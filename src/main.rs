//! Terminal front end: pick a player from the fixture file, then battle
//! random opponents until the player stops.

use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clash_sim::engine::spawn_line_reader;
use clash_sim::opponents::normalize_tag;
use clash_sim::{
    mock_opponent, Battle, BattleConfig, BattleOutcome, BattleRng, BattleState, BattleView,
    CardCatalog, Combatant, FixtureSource, Notice, PlayerProfile, PlayerSource, TimedEvents,
};

/// Real-time tower battles in the terminal
#[derive(Parser, Debug)]
#[command(name = "clash-sim")]
#[command(about = "Real-time tower battles in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Player fixture file (JSON array of player records)
    #[arg(long, default_value = "player.json")]
    fixtures: PathBuf,

    /// Player tag; prompted for when omitted
    #[arg(long)]
    tag: Option<String>,

    /// Session seed, for reproducible opponents and rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Elixir regeneration period in milliseconds
    #[arg(long, default_value_t = 1000)]
    regen_ms: u64,

    /// Opponent action period in milliseconds
    #[arg(long, default_value_t = 5000)]
    opponent_ms: u64,

    /// Battle time limit in seconds
    #[arg(long, default_value_t = 180)]
    time_limit_secs: u64,
}

impl Args {
    fn battle_config(&self) -> BattleConfig {
        BattleConfig::default()
            .with_regen_period(Duration::from_millis(self.regen_ms))
            .with_opponent_period(Duration::from_millis(self.opponent_ms))
            .with_time_limit(Duration::from_secs(self.time_limit_secs))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the game; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let source = FixtureSource::load(&args.fixtures)
        .with_context(|| format!("cannot start without {}", args.fixtures.display()))?;

    let mut session_rng = match args.seed {
        Some(seed) => BattleRng::new(seed),
        None => BattleRng::from_entropy(),
    };
    info!(seed = session_rng.seed(), "session started");

    let config = args.battle_config();
    let catalog = CardCatalog::global();
    let mut lines = spawn_line_reader(BufReader::new(io::stdin()), 16);

    let Some(player) = choose_player(&source, args.tag.as_deref(), &mut lines).await? else {
        return Ok(());
    };

    println!(
        "\nWelcome {} (Level {}, Trophies: {})!",
        player.name, player.exp_level, player.trophies
    );
    println!("Starting battles in the terminal!");

    loop {
        println!("\nSelect game mode:");
        println!("1. Normal Mode (Battle with clan members)");
        let Some(mode) = prompt(&mut lines, "Enter number (1): ").await? else {
            break;
        };
        if mode != "1" {
            println!("Offline mode only supports Normal Mode. Switching to Normal Mode.");
        }

        let opponent = mock_opponent(source.players(), &player.tag, &mut session_rng);
        println!("Opponent: {}", opponent);
        print_deck(&player, catalog);
        println!(
            "\nSelect a card (1-{}) or {} to surrender.",
            player.current_deck.len(),
            config.surrender_token
        );

        let battle = Battle::new(
            config.clone(),
            catalog,
            player.current_deck.clone(),
            opponent.profile(),
            BattleRng::new(session_rng.next_seed()),
        );
        let mut events = TimedEvents::new(lines, &config);
        let report = battle.run(&mut events, &mut ConsoleView).await;
        lines = events.into_input();

        debug!(outcome = %report.outcome, seed = report.seed, elapsed = ?report.elapsed, "battle report");
        println!("\nMatch replay:");
        for (i, entry) in report.replay.iter().enumerate() {
            println!("{}. {}", i + 1, entry);
        }

        match prompt(&mut lines, "\nContinue playing? (y/n): ").await? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    println!("Thank you for playing!");
    Ok(())
}

/// Resolve the player, prompting until a known tag is entered.
///
/// Returns `None` when input ends first.
async fn choose_player(
    source: &FixtureSource,
    tag: Option<&str>,
    lines: &mut mpsc::Receiver<String>,
) -> Result<Option<PlayerProfile>> {
    if let Some(tag) = tag {
        let player = source
            .fetch_player(&normalize_tag(tag))
            .await
            .with_context(|| format!("unknown player tag {}", tag))?;
        return Ok(Some(player));
    }

    loop {
        let Some(tag) = prompt(lines, "Enter player tag (e.g. #PLAYER1): ").await? else {
            return Ok(None);
        };
        if tag.is_empty() {
            println!("Player tag cannot be empty. Please try again.");
            continue;
        }

        match source.fetch_player(&normalize_tag(&tag)).await {
            Ok(player) => return Ok(Some(player)),
            Err(err) => {
                debug!(%err, "player lookup failed");
                println!("Player not found in the fixture file. Please enter a valid tag.");
            }
        }
    }
}

async fn prompt(lines: &mut mpsc::Receiver<String>, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(lines.recv().await)
}

fn print_deck(player: &PlayerProfile, catalog: &CardCatalog) {
    println!("\nYour deck:");
    for (i, card) in player.current_deck.iter().enumerate() {
        let stats = catalog.lookup(&card.name);
        println!(
            "{}. {} (Level {}, Elixir: {}, Damage: {}, HP: {})",
            i + 1,
            card.name,
            card.level,
            stats.elixir_cost,
            stats.base_damage,
            stats.hit_points
        );
    }
}

/// Prints notices and a status line after every state change.
struct ConsoleView;

impl BattleView for ConsoleView {
    fn notice(&mut self, notice: &Notice) {
        match notice {
            Notice::InvalidChoice { deck_size, .. } => {
                println!("Invalid choice. Please select a number from 1 to {}", deck_size);
            }
            Notice::NotEnoughElixir { cost, available, .. } => {
                println!("Not enough elixir! Need {}, you have {:.1}.", cost, available);
            }
            Notice::Played { by: Combatant::Player, text } => println!("> {}", text),
            Notice::Played { by: Combatant::Opponent, text } => println!("< {}", text),
            Notice::OpponentSkipped { text } => println!("< {}", text),
            Notice::Finished { outcome } => {
                let message = match outcome {
                    BattleOutcome::PlayerWin => "Congratulations! You destroyed the opponent's King Tower!",
                    BattleOutcome::OpponentWin => "Your King Tower was destroyed. You lost!",
                    BattleOutcome::Surrender => "You surrendered!",
                    BattleOutcome::Draw => "Time's up! The match ended in a draw.",
                };
                println!("\n{}", message);
            }
        }
    }

    fn status(&mut self, state: &BattleState) {
        let towers = |who: Combatant| {
            state[who]
                .towers()
                .iter()
                .map(|t| format!("{} {}", t.id.name(), t.hit_points()))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        println!("\nYour towers: {}", towers(Combatant::Player));
        println!("Opponent towers: {}", towers(Combatant::Opponent));
        println!(
            "Your Elixir: {:.1} | Opponent Elixir: {:.1}",
            state.player.elixir(),
            state.opponent.elixir()
        );
    }
}
