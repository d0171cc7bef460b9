//! Requests from lobby members and what they produce.
//!
//! The transport layer turns each incoming message into a `LobbyCommand`
//! and hands it to `Lobby::handle` along with the requester's user name.
//! Owner-only commands are checked here, before the lobby is touched.

use super::{Lobby, LobbyResult, LobbySnapshot};
use crate::core::{Player, Settings};
use crate::rules::Game;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LobbyCommand {
    /// The requester joins under `display_name`.
    Join { display_name: String },
    /// Remove a member. Allowed for the member themself and for the owner.
    RemovePlayer { user_name: String },
    /// Owner only.
    ReorderPlayers { user_names: Vec<String> },
    /// Owner only.
    UpdateSettings { settings: Settings },
    /// Owner only.
    StartGame,
}

/// Outcome of an accepted command, to broadcast to every member.
#[derive(Clone, Debug)]
pub enum LobbyEvent {
    Updated(LobbySnapshot),
    Started {
        lobby: LobbySnapshot,
        game: Box<Game>,
    },
}

impl Lobby {
    /// Run `command` on behalf of `requester`.
    pub fn handle(&mut self, requester: &str, command: LobbyCommand) -> LobbyResult<LobbyEvent> {
        match command {
            LobbyCommand::Join { display_name } => {
                self.add_player(Player::new(requester, display_name))?;
            }
            LobbyCommand::RemovePlayer { user_name } => {
                if requester != user_name {
                    self.ensure_owner(requester)?;
                }
                self.remove_player(&user_name)?;
            }
            LobbyCommand::ReorderPlayers { user_names } => {
                self.ensure_owner(requester)?;
                self.reorder_players(&user_names)?;
            }
            LobbyCommand::UpdateSettings { settings } => {
                self.ensure_owner(requester)?;
                self.set_settings(settings)?;
            }
            LobbyCommand::StartGame => {
                let game = self.start_game_as(requester)?;
                return Ok(LobbyEvent::Started {
                    lobby: self.snapshot(),
                    game: Box::new(game),
                });
            }
        }
        Ok(LobbyEvent::Updated(self.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::lobby::{LobbyError, LobbyId, LobbyState};
    use crate::resources::ResourceType;
    use crate::rules::GameDefinition;
    use crate::wonders::{WonderDefinition, WonderSideDefinition};

    fn lobby() -> Lobby {
        let side = WonderSideDefinition::new(ResourceType::Glass, "w.png");
        let mut definition = GameDefinition::new();
        for name in ["Alexandria", "Babylon", "Ephesos"] {
            definition = definition.with_wonder(WonderDefinition::new(name, side.clone(), side.clone()));
        }
        Lobby::new(LobbyId(7), "Game", Player::new("owner", "Owner"), Arc::new(definition))
    }

    fn join(lobby: &mut Lobby, user_name: &str) {
        let command = LobbyCommand::Join {
            display_name: user_name.to_uppercase(),
        };
        lobby.handle(user_name, command).unwrap();
    }

    #[test]
    fn test_join_broadcasts_snapshot() {
        let mut lobby = lobby();
        let event = lobby
            .handle("alice", LobbyCommand::Join { display_name: "Alice".to_string() })
            .unwrap();

        match event {
            LobbyEvent::Updated(snapshot) => {
                assert_eq!(snapshot.players.len(), 2);
                assert_eq!(snapshot.players[1], Player::new("alice", "Alice"));
            }
            LobbyEvent::Started { .. } => panic!("lobby should not start on join"),
        }
    }

    #[test]
    fn test_owner_only_commands() {
        let mut lobby = lobby();
        join(&mut lobby, "alice");
        join(&mut lobby, "bob");

        let reorder = LobbyCommand::ReorderPlayers {
            user_names: vec!["bob".to_string(), "alice".to_string()],
        };
        assert_eq!(
            lobby.handle("alice", reorder.clone()).unwrap_err(),
            LobbyError::NotOwner("alice".to_string())
        );
        assert!(lobby.handle("owner", reorder).is_ok());

        assert!(matches!(
            lobby.handle("bob", LobbyCommand::StartGame),
            Err(LobbyError::NotOwner(_))
        ));
        assert_eq!(lobby.state(), LobbyState::Open);
    }

    #[test]
    fn test_remove_self_or_by_owner() {
        let mut lobby = lobby();
        join(&mut lobby, "alice");
        join(&mut lobby, "bob");

        let kick_bob = LobbyCommand::RemovePlayer {
            user_name: "bob".to_string(),
        };
        assert!(matches!(
            lobby.handle("alice", kick_bob.clone()),
            Err(LobbyError::NotOwner(_))
        ));
        assert!(lobby.handle("bob", kick_bob).is_ok());

        let kick_alice = LobbyCommand::RemovePlayer {
            user_name: "alice".to_string(),
        };
        assert!(lobby.handle("owner", kick_alice).is_ok());
        assert_eq!(lobby.players().len(), 1);
    }

    #[test]
    fn test_start_returns_game() {
        let mut lobby = lobby();
        join(&mut lobby, "alice");
        join(&mut lobby, "bob");

        match lobby.handle("owner", LobbyCommand::StartGame).unwrap() {
            LobbyEvent::Started { lobby: snapshot, game } => {
                assert_eq!(snapshot.state, LobbyState::Started);
                assert_eq!(game.players().len(), 3);
                assert_eq!(game.seat_of("bob"), Some(2));
            }
            LobbyEvent::Updated(_) => panic!("lobby should have started"),
        }
    }
}
