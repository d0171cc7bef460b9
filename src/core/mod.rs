//! Core types shared by the lobby and the rules engine: player identity,
//! settings and deterministic randomness.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{Settings, SettingsError, WonderSidePickMethod, LAST_AGE};
pub use player::Player;
pub use rng::GameRng;
