//! Lobby roster rules and the transition into a running game.
//!
//! These tests only use the public API: a catalog with enough wonders for
//! the largest table, and a lobby owned by "gameowner".

use std::sync::Arc;

use wonders_engine::core::{Player, Settings};
use wonders_engine::lobby::{Lobby, LobbyError, LobbyId, LobbyState};
use wonders_engine::resources::ResourceType;
use wonders_engine::rules::{GameDefinition, GlobalRules};
use wonders_engine::wonders::{WonderDefinition, WonderSideDefinition};

fn definition() -> Arc<GameDefinition> {
    let mut definition = GameDefinition::new().with_rules(GlobalRules::default());
    for i in 0..7 {
        let side = WonderSideDefinition::new(ResourceType::Stone, format!("wonder{}.png", i));
        definition = definition.with_wonder(WonderDefinition::new(format!("Wonder {}", i), side.clone(), side));
    }
    Arc::new(definition)
}

fn new_lobby() -> Lobby {
    Lobby::new(LobbyId(42), "Test Game", Player::new("gameowner", "Game owner"), definition())
}

/// Add `count` players named testuser0, testuser1, ...
fn add_players(lobby: &mut Lobby, count: usize) {
    for i in 0..count {
        let player = Player::new(format!("testuser{}", i), format!("Test User {}", i));
        lobby.add_player(player).unwrap();
    }
}

fn user_names(lobby: &Lobby) -> Vec<String> {
    lobby.players().iter().map(|p| p.user_name.clone()).collect()
}

// =============================================================================
// Ownership
// =============================================================================

/// Only the owner's user name is recognised as owner.
#[test]
fn test_is_owner() {
    let mut lobby = new_lobby();
    lobby.add_player(Player::new("testuser", "Test User")).unwrap();

    assert!(lobby.is_owner("gameowner"));
    assert!(!lobby.is_owner(""));
    assert!(!lobby.is_owner("garbage"));
    assert!(!lobby.is_owner("testuser"));
    assert!(!lobby.is_owner("Game owner"));
}

// =============================================================================
// Adding players
// =============================================================================

/// A new user name joins the roster at the end.
#[test]
fn test_add_player_success() {
    let mut lobby = new_lobby();
    lobby.add_player(Player::new("testuser", "Test User")).unwrap();

    assert!(lobby.contains_user("testuser"));
    assert_eq!(user_names(&lobby), vec!["gameowner", "testuser"]);
}

/// Display names may repeat, user names may not.
#[test]
fn test_add_player_fails_on_same_name() {
    let mut lobby = new_lobby();
    lobby.add_player(Player::new("testuser", "Test User")).unwrap();
    lobby.add_player(Player::new("testuser2", "Test User")).unwrap();

    let result = lobby.add_player(Player::new("testuser", "Someone Else"));
    assert_eq!(result, Err(LobbyError::PlayerNameAlreadyUsed("testuser".to_string())));
    assert_eq!(lobby.players().len(), 3);
}

/// The owner plus max - 1 players fill the lobby, one more overflows.
#[test]
fn test_add_player_overflow() {
    let mut lobby = new_lobby();
    let max = definition().max_players();
    add_players(&mut lobby, max - 1);
    assert_eq!(lobby.players().len(), max);

    let result = lobby.add_player(Player::new("late", "Late User"));
    assert_eq!(result, Err(LobbyError::PlayerOverflow { max }));
    assert_eq!(lobby.players().len(), max);
}

/// Once the game has started, the roster is frozen, whatever its size.
#[test]
fn test_add_player_fails_when_started() {
    let definition = definition();
    for count in definition.min_players()..=definition.max_players() {
        let mut lobby = new_lobby();
        add_players(&mut lobby, count - 1);
        lobby.start_game().unwrap();

        let result = lobby.add_player(Player::new("late", "Late User"));
        assert_eq!(result, Err(LobbyError::GameAlreadyStarted), "{} players", count);
        assert_eq!(lobby.remove_player("testuser0"), Err(LobbyError::GameAlreadyStarted));
        assert_eq!(lobby.players().len(), count);
    }
}

/// Roster errors are reported in a fixed order: started, then duplicate.
#[test]
fn test_add_player_started_reported_before_duplicate() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 2);
    lobby.start_game().unwrap();

    let result = lobby.add_player(Player::new("testuser0", "Duplicate"));
    assert_eq!(result, Err(LobbyError::GameAlreadyStarted));
}

// =============================================================================
// Reordering
// =============================================================================

/// A list of every member but the owner reorders them behind the owner.
#[test]
fn test_reorder_players_without_owner() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 3);

    let order = vec!["testuser2".to_string(), "testuser0".to_string(), "testuser1".to_string()];
    lobby.reorder_players(&order).unwrap();

    assert_eq!(user_names(&lobby), vec!["gameowner", "testuser2", "testuser0", "testuser1"]);
}

/// A full permutation may move the owner away from the first seat.
#[test]
fn test_reorder_players_full_permutation() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 2);

    let order = vec!["testuser1".to_string(), "gameowner".to_string(), "testuser0".to_string()];
    lobby.reorder_players(&order).unwrap();

    assert_eq!(user_names(&lobby), order);
    assert!(lobby.is_owner("gameowner"));
}

/// Unknown names are rejected and the order is unchanged.
#[test]
fn test_reorder_players_fails_on_unknown_player() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 3);
    let before = user_names(&lobby);

    let order = vec!["testuser4".to_string(), "testuser0".to_string(), "testuser1".to_string()];
    assert_eq!(
        lobby.reorder_players(&order),
        Err(LobbyError::UnknownPlayer("testuser4".to_string()))
    );
    assert_eq!(user_names(&lobby), before);
}

/// Leaving someone out is a mismatch.
#[test]
fn test_reorder_players_fails_on_missing_player() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 3);

    let order = vec!["testuser0".to_string(), "testuser1".to_string()];
    assert_eq!(lobby.reorder_players(&order), Err(LobbyError::PlayerListMismatch));
}

// =============================================================================
// Starting
// =============================================================================

/// Every roster size below the minimum underflows.
#[test]
fn test_start_game_fails_below_min_players() {
    let min = definition().min_players();
    for count in 1..min {
        let mut lobby = new_lobby();
        add_players(&mut lobby, count - 1);

        assert!(
            matches!(lobby.start_game(), Err(LobbyError::PlayerUnderflow { min: m }) if m == min),
            "{} players should not be enough",
            count
        );
        assert_eq!(lobby.state(), LobbyState::Open);
    }
}

/// Every roster size from the minimum to the maximum starts.
#[test]
fn test_start_game_succeeds_within_bounds() {
    let definition = definition();
    for count in definition.min_players()..=definition.max_players() {
        let mut lobby = new_lobby();
        add_players(&mut lobby, count - 1);

        let game = lobby.start_game().unwrap();
        assert_eq!(lobby.state(), LobbyState::Started);
        assert_eq!(game.players().len(), count);
        assert_eq!(game.table().len(), count);
    }
}

/// Starting twice fails: Started is terminal.
#[test]
fn test_start_game_twice() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 2);
    lobby.start_game().unwrap();

    assert!(matches!(lobby.start_game(), Err(LobbyError::GameAlreadyStarted)));
}

/// Seats follow the roster order and boards get the lobby's settings.
#[test]
fn test_start_game_uses_roster_and_settings() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 2);
    lobby
        .reorder_players(&["testuser1".to_string(), "testuser0".to_string()])
        .unwrap();
    lobby
        .set_settings(Settings::default().with_initial_gold(7).with_random_seed(3))
        .unwrap();

    let game = lobby.start_game().unwrap();
    assert_eq!(game.seat_of("gameowner"), Some(0));
    assert_eq!(game.seat_of("testuser1"), Some(1));
    assert_eq!(game.seat_of("testuser0"), Some(2));
    assert!(game.table().boards().all(|board| board.gold() == 7));
}

/// Snapshots carry the roster and state, and survive the binary encoding.
#[test]
fn test_snapshot_after_start() {
    let mut lobby = new_lobby();
    add_players(&mut lobby, 2);
    lobby.start_game().unwrap();

    let snapshot = lobby.snapshot();
    assert_eq!(snapshot.owner, "gameowner");
    assert_eq!(snapshot.players.len(), 3);
    assert_eq!(snapshot.state, LobbyState::Started);

    let bytes = snapshot.encode().unwrap();
    assert_eq!(wonders_engine::lobby::LobbySnapshot::decode(&bytes).unwrap(), snapshot);
}
