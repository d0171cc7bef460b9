//! Game rules: the shared game definition, running games and scoring.
//!
//! ## Key Types
//!
//! - `GameDefinition`: Immutable catalog shared by every game through `Arc`
//! - `Game`: A running game, the single entry point for player moves
//! - `Move`: What a player does with a card on their turn
//! - `ScoreBoard`: Final points per category and ranking
//!
//! Every move is validated in full before anything is mutated, so a
//! rejected move leaves the game exactly as it was.

pub mod definition;
pub mod game;
pub mod score;

use thiserror::Error;

use crate::cards::CardId;
use crate::resources::{Provider, ResourceError, Resources};
use crate::wonders::WonderError;

pub use definition::{GameDefinition, GlobalRules};
pub use game::{CardPlayability, Game, GameSnapshot, Move};
pub use score::{PlayerScore, ScoreBoard, ScoreCategory};

/// Why an action cannot be paid for.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("payment option {index} does not exist ({count} available)")]
    UnknownPaymentOption { index: usize, count: usize },
    #[error("{provider:?} cannot provide {resources}")]
    NeighbourCannotProvide {
        provider: Provider,
        resources: Resources,
    },
    #[error("missing resources: {missing}")]
    MissingResources { missing: Resources },
    #[error("not enough gold: {required} required, {available} available")]
    NotEnoughGold { required: u32, available: u32 },
    #[error("no payment option is affordable")]
    NoPaymentOption,
    #[error("invalid purchase: {0}")]
    Purchase(#[from] ResourceError),
    #[error("price does not fit in a gold amount")]
    PriceOverflow,
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Errors raised while playing a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Wonder(#[from] WonderError),
    #[error("unknown card {0}")]
    UnknownCard(CardId),
    #[error("no player at seat {0}")]
    UnknownPlayer(usize),
    #[error("a card named {0:?} is already built")]
    CardAlreadyBuilt(String),
    #[error("no free build available this age")]
    NoFreePlayAvailable,
    #[error("no build from the discard pile available")]
    NoDiscardPlayAvailable,
    #[error("card {0} is not in the discard pile")]
    NotDiscarded(CardId),
    #[error("no victory points configured for age {0}")]
    UnknownAge(u8),
    #[error("the game is over")]
    GameOver,
    #[error("{required} wonders are needed, only {available} defined")]
    NotEnoughWonders { available: usize, required: usize },
}

pub type GameResult<T> = Result<T, GameError>;
