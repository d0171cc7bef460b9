//! # wonders-engine
//!
//! Rules engine and pre-game lobby for a seven-wonders style card-drafting
//! game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: Every fallible operation checks everything
//!    first and returns a typed error. A rejected action never leaves a
//!    board half-paid.
//!
//! 2. **Catalog as an arena**: Cards and wonders are loaded once into an
//!    immutable `GameDefinition` shared through `Arc`. Boards hold handles to
//!    catalog records, never mutable copies.
//!
//! 3. **Plain owned data**: No interior mutability. Each lobby or game is
//!    driven by one writer at a time; distinct instances share nothing but
//!    the catalog.
//!
//! ## Modules
//!
//! - `core`: Players, settings, deterministic RNG
//! - `resources`: Resource multisets, production, neighbour trading
//! - `cards`: Card catalog records and their payment requirements
//! - `effects`: What building a card or wonder stage does
//! - `boards`: Per-player boards and the table seating them
//! - `wonders`: Wonder definitions and stages
//! - `rules`: Game definition, running games, scoring
//! - `lobby`: Roster management up to the start of a game

pub mod core;
pub mod resources;
pub mod cards;
pub mod effects;
pub mod boards;
pub mod wonders;
pub mod rules;
pub mod lobby;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, Settings, SettingsError, WonderSidePickMethod, LAST_AGE};

pub use crate::resources::{
    Production, ProductionError, Provider, ResourceError, ResourceTransaction,
    ResourceTransactions, ResourceType, Resources, TradingRules,
};

pub use crate::cards::{
    Card, CardBack, CardId, CardRegistry, CatalogError, Color, PaymentOption, Requirements,
};

pub use crate::effects::{BoardElementType, Effect, SpecialAbility};

pub use crate::boards::{
    Board, BoardSnapshot, Military, RelativeBoardPosition, Science, ScienceType, Table,
    TableSnapshot,
};

pub use crate::wonders::{
    Wonder, WonderDefinition, WonderError, WonderSide, WonderSideDefinition, WonderStage,
    WonderStageDefinition,
};

pub use crate::rules::{
    ActionError, CardPlayability, Game, GameDefinition, GameError, GameSnapshot, GlobalRules,
    Move, PlayerScore, ScoreBoard, ScoreCategory,
};

pub use crate::lobby::{
    Lobby, LobbyCommand, LobbyError, LobbyEvent, LobbyId, LobbySnapshot, LobbyState,
};
