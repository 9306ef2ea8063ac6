#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // snake::SnakeID reads fine to me
)]
pub mod engine;
pub mod error;
pub mod grid;
pub mod serializer;

pub use engine::{
    food::{FoodPlacer, NoFood, Placement, RandomFood},
    game::{Cause, GameState, Outcome, Tick, DEFAULT_BOARD},
    snake::{Snake, SnakeID},
};
pub use error::{BoardError, TopologyError};
pub use grid::{
    board::Board,
    types::{Coord, Direction},
};
