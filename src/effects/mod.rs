//! Effect system.
//!
//! - `Effect`: Closed set of effect kinds, applied when a card or wonder
//!   stage is built and scored at the end of the game
//! - `BoardElementType`: What bonus effects count on boards
//! - `SpecialAbility`: Lasting abilities recorded on a board
//!
//! Effects are plain data. The only way they change a game is through
//! `Effect::apply`.

mod ability;
mod effect;

pub use ability::SpecialAbility;
pub use effect::{BoardElementType, Effect};
