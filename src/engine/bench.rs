use super::{
    food::{FoodPlacer, RandomFood},
    game::GameState,
    snake::SnakeID,
};
use crate::grid::{board::Board, codec};

/// Column for snake `id` when `num_snakes` share a board `width` wide.
fn column(id: SnakeID, width: i64, num_snakes: u64) -> i64 {
    let spacing = (width - 2) / num_snakes as i64;
    let offset = spacing / 2;

    1 + offset + spacing * id as i64
}

/// Builds a walled board with `num_snakes` vertical snakes facing up and
/// `food` pieces dropped from a fixed seed.
///
/// # Panics
///
/// Panics if the board is too small for the requested snakes.
#[must_use]
pub fn make_state(
    num_snakes: u64,
    width: i64,
    height: i64,
    food: usize,
) -> GameState {
    assert!(width >= 3 && height >= 5, "board too small for snakes");
    assert!(
        num_snakes as i64 <= (width - 2),
        "too many snakes for a {width} wide board"
    );

    let columns: Vec<i64> = (0..num_snakes)
        .map(|id| column(id as SnakeID, width, num_snakes))
        .collect();

    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            let glyph = if border {
                codec::WALL
            } else if !columns.contains(&x) || y < 2 || y > height - 3 {
                codec::EMPTY
            } else if y == height - 3 {
                'w'
            } else {
                '^'
            };
            text.push(glyph);
        }
        text.push('\n');
    }

    let mut board = Board::parse(&text)
        .unwrap_or_else(|e| panic!("generated board is malformed: {e}"));
    let mut placer = RandomFood::seeded(0);
    for _ in 0..food {
        placer.place_food(&mut board, &[]);
    }

    GameState::from_board(board)
        .unwrap_or_else(|e| panic!("generated board is malformed: {e}"))
}
