use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::snake::Snake;
use crate::grid::{board::Board, codec, types::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed(Coord),
    /// No food could be placed. The simulation carries on without it.
    Exhausted,
}

/// Replenishes food after a snake eats. Called synchronously from inside a
/// tick, once per meal.
///
/// The placer sees the whole game state as it stands after the meal: the
/// board, and the snake list with the eater's new head already recorded.
/// Snake records are read-only; the board may only be changed through
/// [`Board::place_food`].
pub trait FoodPlacer {
    fn place_food(
        &mut self,
        board: &mut Board,
        snakes: &[Snake],
    ) -> Placement;
}

impl<F> FoodPlacer for F
where
    F: FnMut(&mut Board, &[Snake]) -> Placement,
{
    fn place_food(
        &mut self,
        board: &mut Board,
        snakes: &[Snake],
    ) -> Placement {
        self(board, snakes)
    }
}

/// Never places anything.
pub struct NoFood;

impl FoodPlacer for NoFood {
    fn place_food(&mut self, _board: &mut Board, _: &[Snake]) -> Placement {
        Placement::Exhausted
    }
}

/// Drops food on a uniformly chosen empty cell.
pub struct RandomFood {
    rng: StdRng,
}

impl RandomFood {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl FoodPlacer for RandomFood {
    fn place_food(&mut self, board: &mut Board, _: &[Snake]) -> Placement {
        let empty: Vec<Coord> = board
            .coords()
            .filter(|coord| board.get(*coord) == Some(codec::EMPTY))
            .collect();

        match empty.choose(&mut self.rng) {
            Some(coord) if board.place_food(*coord) => {
                debug!("placed food at {coord}");
                Placement::Placed(*coord)
            }
            _ => Placement::Exhausted,
        }
    }
}
