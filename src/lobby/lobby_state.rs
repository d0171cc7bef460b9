//! The lobby roster and its transition into a running game.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{LobbyError, LobbyId, LobbyResult};
use crate::core::{Player, Settings};
use crate::rules::{Game, GameDefinition};

/// Lifecycle of a lobby. `Started` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LobbyState {
    #[default]
    Open,
    Started,
}

/// A game being set up.
///
/// ## Invariants
///
/// - User names are unique in the roster
/// - The roster never exceeds the definition's maximum player count
/// - The owner is always in the roster
/// - Once started, nothing changes
#[derive(Clone, Debug)]
pub struct Lobby {
    id: LobbyId,
    name: String,
    owner: Player,
    /// Seat order of the future game.
    players: Vec<Player>,
    settings: Settings,
    state: LobbyState,
    definition: Arc<GameDefinition>,
}

impl Lobby {
    /// Open a lobby with `owner` as its only member.
    pub fn new(
        id: LobbyId,
        name: impl Into<String>,
        owner: Player,
        definition: Arc<GameDefinition>,
    ) -> Self {
        let name = name.into();
        tracing::info!(lobby_id = %id, %name, owner = %owner.user_name, "lobby opened");
        Self {
            id,
            name,
            players: vec![owner.clone()],
            owner,
            settings: Settings::default(),
            state: LobbyState::Open,
            definition,
        }
    }

    #[must_use]
    pub fn id(&self) -> LobbyId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn owner(&self) -> &Player {
        &self.owner
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> LobbyState {
        self.state
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state == LobbyState::Started
    }

    #[must_use]
    pub fn is_owner(&self, user_name: &str) -> bool {
        self.owner.is(user_name)
    }

    #[must_use]
    pub fn contains_user(&self, user_name: &str) -> bool {
        self.players.iter().any(|player| player.is(user_name))
    }

    fn ensure_open(&self) -> LobbyResult<()> {
        if self.is_started() {
            return Err(LobbyError::GameAlreadyStarted);
        }
        Ok(())
    }

    /// Add a player at the end of the roster.
    #[instrument(skip(self), fields(lobby_id = %self.id, user_name = %player.user_name))]
    pub fn add_player(&mut self, player: Player) -> LobbyResult<()> {
        self.ensure_open()?;
        if self.contains_user(&player.user_name) {
            return Err(LobbyError::PlayerNameAlreadyUsed(player.user_name));
        }
        if self.players.len() >= self.definition.max_players() {
            return Err(LobbyError::PlayerOverflow {
                max: self.definition.max_players(),
            });
        }
        self.players.push(player);
        tracing::info!(players = self.players.len(), "player joined");
        Ok(())
    }

    /// Remove a player. The owner cannot leave.
    #[instrument(skip(self), fields(lobby_id = %self.id))]
    pub fn remove_player(&mut self, user_name: &str) -> LobbyResult<Player> {
        self.ensure_open()?;
        if self.is_owner(user_name) {
            return Err(LobbyError::OwnerCannotLeave);
        }
        let index = self
            .players
            .iter()
            .position(|player| player.is(user_name))
            .ok_or_else(|| LobbyError::UnknownPlayer(user_name.to_string()))?;
        let player = self.players.remove(index);
        tracing::info!(players = self.players.len(), "player left");
        Ok(player)
    }

    /// Reorder the roster.
    ///
    /// `user_names` is either every member in the new order, or every member
    /// but the owner, who then keeps the first seat.
    #[instrument(skip(self), fields(lobby_id = %self.id))]
    pub fn reorder_players(&mut self, user_names: &[String]) -> LobbyResult<()> {
        self.ensure_open()?;

        let mut ordered = Vec::with_capacity(self.players.len());
        let mut seen = FxHashSet::default();
        for user_name in user_names {
            let player = self
                .players
                .iter()
                .find(|player| player.is(user_name))
                .ok_or_else(|| LobbyError::UnknownPlayer(user_name.clone()))?;
            if !seen.insert(user_name.as_str()) {
                return Err(LobbyError::PlayerListMismatch);
            }
            ordered.push(player.clone());
        }

        let owner_listed = seen.contains(self.owner.user_name.as_str());
        if !owner_listed {
            ordered.insert(0, self.owner.clone());
        }
        if ordered.len() != self.players.len() {
            return Err(LobbyError::PlayerListMismatch);
        }

        self.players = ordered;
        tracing::info!(?user_names, "players reordered");
        Ok(())
    }

    /// Replace the settings. They are only validated when the game starts.
    #[instrument(skip_all, fields(lobby_id = %self.id))]
    pub fn set_settings(&mut self, settings: Settings) -> LobbyResult<()> {
        self.ensure_open()?;
        self.settings = settings;
        tracing::info!("settings updated");
        Ok(())
    }

    /// Start the game with the current roster, in roster order.
    #[instrument(skip(self), fields(lobby_id = %self.id))]
    pub fn start_game(&mut self) -> LobbyResult<Game> {
        self.ensure_open()?;
        if self.players.len() < self.definition.min_players() {
            return Err(LobbyError::PlayerUnderflow {
                min: self.definition.min_players(),
            });
        }
        if self.players.len() > self.definition.max_players() {
            return Err(LobbyError::PlayerOverflow {
                max: self.definition.max_players(),
            });
        }
        self.settings.validate()?;

        let game = self.definition.create_game(
            self.id.0,
            self.players.clone(),
            self.settings.clone(),
        )?;
        self.state = LobbyState::Started;
        tracing::info!(players = self.players.len(), "game started");
        Ok(game)
    }

    /// Start the game on behalf of `requester`, who must own the lobby.
    pub fn start_game_as(&mut self, requester: &str) -> LobbyResult<Game> {
        self.ensure_owner(requester)?;
        self.start_game()
    }

    pub(super) fn ensure_owner(&self, requester: &str) -> LobbyResult<()> {
        if !self.is_owner(requester) {
            tracing::warn!(lobby_id = %self.id, requester, "owner-only request rejected");
            return Err(LobbyError::NotOwner(requester.to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> LobbySnapshot {
        LobbySnapshot {
            id: self.id,
            name: self.name.clone(),
            owner: self.owner.user_name.clone(),
            players: self.players.clone(),
            settings: self.settings.clone(),
            state: self.state,
        }
    }
}

/// Public view of a lobby, broadcast to its members on every change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySnapshot {
    pub id: LobbyId,
    pub name: String,
    pub owner: String,
    pub players: Vec<Player>,
    pub settings: Settings,
    pub state: LobbyState,
}

impl LobbySnapshot {
    /// Compact binary form for the transport layer.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
