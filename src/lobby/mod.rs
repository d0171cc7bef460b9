//! Pre-game lobby.
//!
//! ## Key Types
//!
//! - `Lobby`: Roster, owner and settings of a game that has not started
//! - `LobbyCommand`: A request from a member, dispatched by `Lobby::handle`
//! - `LobbySnapshot`: Public view broadcast after every change
//!
//! A lobby is plain owned data. Callers serialise access to each lobby, for
//! example by owning it from a single task and feeding it commands.

mod command;
mod lobby_state;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::SettingsError;
use crate::rules::GameError;

pub use command::{LobbyCommand, LobbyEvent};
pub use lobby_state::{Lobby, LobbySnapshot, LobbyState};

/// Unique identifier of a lobby.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LobbyId(pub u64);

impl fmt::Display for LobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LobbyError {
    #[error("user name {0:?} is already used in this lobby")]
    PlayerNameAlreadyUsed(String),
    #[error("the game has already started")]
    GameAlreadyStarted,
    #[error("the lobby is full ({max} players maximum)")]
    PlayerOverflow { max: usize },
    #[error("not enough players to start ({min} minimum)")]
    PlayerUnderflow { min: usize },
    #[error("user {0:?} is not in this lobby")]
    UnknownPlayer(String),
    #[error("the new order does not match the players of this lobby")]
    PlayerListMismatch,
    #[error("the owner cannot leave the lobby")]
    OwnerCannotLeave,
    #[error("user {0:?} does not own this lobby")]
    NotOwner(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type LobbyResult<T> = Result<T, LobbyError>;
