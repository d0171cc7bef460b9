//! Wonders: the per-player monument built stage by stage.
//!
//! ## Key Types
//!
//! - `WonderDefinition`: Catalog record with both sides
//! - `Wonder`: The instance on a board
//! - `WonderStage`: One level, built at most once

mod definition;
mod stage;
mod wonder;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use definition::{WonderDefinition, WonderSideDefinition, WonderStageDefinition};
pub use stage::WonderStage;
pub use wonder::Wonder;

/// Which face of the wonder board is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WonderSide {
    #[default]
    A,
    B,
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum WonderError {
    #[error("this wonder stage is already built")]
    StageAlreadyBuilt,
    #[error("this wonder has already reached its maximum level")]
    MaxLevelReached,
    #[error("no wonder stage has been built yet")]
    NoStageBuilt,
}

pub type WonderResult<T> = Result<T, WonderError>;
