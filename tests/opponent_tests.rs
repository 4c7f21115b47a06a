//! Opponent selection tests.
//!
//! These tests verify that every game mode:
//! - Picks from the pool the source returns
//! - Falls back to the default opponent on errors and empty pools

use async_trait::async_trait;

use clash_sim::core::BattleRng;
use clash_sim::opponents::source::Result;
use clash_sim::opponents::{
    find_opponent, ClanMember, CurrentWar, FixtureSource, GameMode, Opponent, PlayerClan,
    PlayerProfile, PlayerRanking, PlayerSource, SourceError, Tournament, TournamentMember,
    WarParticipant,
};

/// A source with canned answers; `None` fields answer with an error.
#[derive(Default)]
struct StubSource {
    members: Option<Vec<ClanMember>>,
    war: Option<CurrentWar>,
    tournament: Option<Tournament>,
    rankings: Option<Vec<PlayerRanking>>,
}

#[async_trait]
impl PlayerSource for StubSource {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile> {
        Err(SourceError::not_found(format!("player {}", tag)))
    }

    async fn fetch_clan_members(&self, _clan_tag: &str) -> Result<Vec<ClanMember>> {
        self.members.clone().ok_or(SourceError::Unauthorized)
    }

    async fn fetch_current_war(&self, _clan_tag: &str) -> Result<CurrentWar> {
        self.war
            .clone()
            .ok_or_else(|| SourceError::Network("connection reset".into()))
    }

    async fn search_tournament(&self, name_or_tag: &str) -> Result<Tournament> {
        self.tournament
            .clone()
            .ok_or_else(|| SourceError::not_found(format!("tournament {}", name_or_tag)))
    }

    async fn fetch_location_player_rankings(&self, location_id: &str, limit: usize) -> Result<Vec<PlayerRanking>> {
        assert_eq!(location_id, "global");
        assert_eq!(limit, 10);
        self.rankings.clone().ok_or(SourceError::Unauthorized)
    }
}

fn player(clan: Option<&str>) -> PlayerProfile {
    PlayerProfile {
        tag: "#ME".into(),
        name: "Me".into(),
        exp_level: 12,
        trophies: 5000,
        current_deck: Default::default(),
        clan: clan.map(|tag| PlayerClan {
            tag: tag.into(),
            name: "Clan".into(),
        }),
    }
}

fn member(name: &str, trophies: i64) -> ClanMember {
    ClanMember {
        tag: format!("#{}", name.to_uppercase()),
        name: name.into(),
        trophies,
    }
}

/// Test that normal mode picks a clan member.
#[tokio::test]
async fn test_normal_mode_picks_clan_member() {
    let source = StubSource {
        members: Some(vec![member("Ann", 4000), member("Ben", 4100)]),
        ..Default::default()
    };
    let mut rng = BattleRng::new(1);

    let opponent = find_opponent(&source, &player(Some("#CLAN")), &GameMode::Normal, &mut rng).await;

    assert!(matches!(opponent, Opponent::ClanMember { .. }));
    assert!(["Ann", "Ben"].contains(&opponent.name()));
    // clan members carry no deck; the engine mirrors the player's
    assert!(opponent.deck().is_none());
}

/// Test the fallbacks of normal mode.
#[tokio::test]
async fn test_normal_mode_fallbacks() {
    let mut rng = BattleRng::new(1);

    // not in a clan
    let source = StubSource {
        members: Some(vec![member("Ann", 4000)]),
        ..Default::default()
    };
    let opponent = find_opponent(&source, &player(None), &GameMode::Normal, &mut rng).await;
    assert!(opponent.is_default());

    // source error
    let source = StubSource::default();
    let opponent = find_opponent(&source, &player(Some("#CLAN")), &GameMode::Normal, &mut rng).await;
    assert!(opponent.is_default());

    // empty clan
    let source = StubSource {
        members: Some(Vec::new()),
        ..Default::default()
    };
    let opponent = find_opponent(&source, &player(Some("#CLAN")), &GameMode::Normal, &mut rng).await;
    assert_eq!(opponent.name(), "Default Enemy");
    assert_eq!(opponent.rating(), 1000);
}

/// Test that tournament mode rates opponents by their score.
#[tokio::test]
async fn test_tournament_mode() {
    let source = StubSource {
        tournament: Some(Tournament {
            tag: "#CUP".into(),
            name: "Cup".into(),
            members_list: vec![TournamentMember {
                tag: "#T1".into(),
                name: "Tess".into(),
                score: 42,
            }],
        }),
        ..Default::default()
    };
    let mut rng = BattleRng::new(1);

    let mode = GameMode::Tournament { query: "Cup".into() };
    let opponent = find_opponent(&source, &player(None), &mode, &mut rng).await;
    assert_eq!(opponent.name(), "Tess");
    assert_eq!(opponent.rating(), 42);

    let mode = GameMode::Tournament { query: "  ".into() };
    assert!(find_opponent(&source, &player(None), &mode, &mut rng).await.is_default());

    let missing = StubSource::default();
    let mode = GameMode::Tournament { query: "Cup".into() };
    assert!(find_opponent(&missing, &player(None), &mode, &mut rng).await.is_default());
}

/// Test that ranked mode defaults to the global ranking.
#[tokio::test]
async fn test_ranked_mode_uses_global_location() {
    let source = StubSource {
        rankings: Some(vec![PlayerRanking {
            tag: "#R1".into(),
            name: "Rex".into(),
            trophies: 9000,
        }]),
        ..Default::default()
    };
    let mut rng = BattleRng::new(1);

    let mode = GameMode::Ranked { location: String::new() };
    let opponent = find_opponent(&source, &player(None), &mode, &mut rng).await;

    assert_eq!(opponent.to_string(), "Rex (Trophies: 9000)");
}

/// Test that clan war opponents have a zero rating.
#[tokio::test]
async fn test_clan_war_mode() {
    let source = StubSource {
        war: Some(CurrentWar {
            participants: vec![WarParticipant {
                tag: "#W1".into(),
                name: "Wes".into(),
            }],
        }),
        ..Default::default()
    };
    let mut rng = BattleRng::new(1);

    let opponent = find_opponent(&source, &player(Some("#CLAN")), &GameMode::ClanWar, &mut rng).await;
    assert_eq!(opponent.name(), "Wes");
    assert_eq!(opponent.rating(), 0);

    let failing = StubSource::default();
    let opponent = find_opponent(&failing, &player(Some("#CLAN")), &GameMode::ClanWar, &mut rng).await;
    assert!(opponent.is_default());
}

/// Test opponent selection against the offline fixture source.
#[tokio::test]
async fn test_fixture_source_modes() {
    let source = FixtureSource::from_json(
        r##"[
            {"tag": "#ME", "name": "Me", "trophies": 5000, "clan": {"tag": "#CLAN"}},
            {"tag": "#YOU", "name": "You", "trophies": 4000, "clan": {"tag": "#CLAN"}}
        ]"##,
    )
    .unwrap();
    let me = source.find("#me").cloned().unwrap();
    let mut rng = BattleRng::new(4);

    let opponent = find_opponent(&source, &me, &GameMode::Normal, &mut rng).await;
    assert!(["Me", "You"].contains(&opponent.name()));

    // fixtures know nothing about wars
    let opponent = find_opponent(&source, &me, &GameMode::ClanWar, &mut rng).await;
    assert!(opponent.is_default());

    let mode = GameMode::Ranked { location: "global".into() };
    let opponent = find_opponent(&source, &me, &mode, &mut rng).await;
    assert!(!opponent.is_default());
}

/// Test that the default opponent mirrors the player's deck in battle.
#[test]
fn test_default_profile() {
    let profile = Opponent::Default.profile();

    assert_eq!(profile.name, "Default Enemy");
    assert!(profile.deck.is_none());
}
