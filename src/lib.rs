mod ai;
mod board;
pub mod cli;
mod common;
mod config;
mod cooldown;
mod cursor;
mod game;
mod logging;
mod placement;
mod ship;
mod snapshot;
mod tile;
mod turn;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use cooldown::Cooldown;
pub use cursor::Cursor;
pub use game::*;
pub use logging::{init_logging, init_logging_with_default};
pub use placement::*;
pub use ship::*;
pub use snapshot::*;
pub use tile::*;
pub use turn::*;
