//! Player boards and the table that seats them.
//!
//! ## Key Types
//!
//! - `Board`: One player's accumulated state
//! - `Table`: Boards in seat order with circular neighbour lookup
//! - `Military`, `Science`: Progress tracks scored at the end of the game
//! - `BoardSnapshot`, `TableSnapshot`: Serializable public views

mod board;
mod military;
mod science;
mod table;

pub use board::{Board, BoardSnapshot};
pub use military::Military;
pub use science::{Science, ScienceType};
pub use table::{RelativeBoardPosition, Table, TableSnapshot};
