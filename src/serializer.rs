//! Plain-text boards: one line per row, no header.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::info;

use crate::{engine::game::GameState, error::BoardError, grid::board::Board};

/// # Errors
///
/// Fails if the text is not a well-formed board.
pub fn load_str(text: &str) -> Result<GameState, BoardError> {
    GameState::from_board(Board::parse(text)?)
}

/// # Errors
///
/// Fails if reading fails or the text is not a well-formed board.
pub fn load(mut source: impl BufRead) -> Result<GameState, BoardError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    load_str(&text)
}

/// # Errors
///
/// Fails if the file cannot be read or is not a well-formed board.
pub fn load_file(path: impl AsRef<Path>) -> Result<GameState, BoardError> {
    let path = path.as_ref();
    let state = load(BufReader::new(File::open(path)?))?;
    info!(
        "loaded {}x{} board with {} snakes from {}",
        state.board().width(),
        state.board().height(),
        state.snakes().len(),
        path.display()
    );
    Ok(state)
}

/// Writes every row verbatim, each followed by `\n`.
///
/// # Errors
///
/// Propagates write failures.
pub fn save(state: &GameState, mut destination: impl Write) -> io::Result<()> {
    write!(destination, "{}", state.board())?;
    destination.flush()
}

/// # Errors
///
/// Propagates file creation and write failures.
pub fn save_file(state: &GameState, path: impl AsRef<Path>) -> io::Result<()> {
    save(state, BufWriter::new(File::create(path)?))
}

/// Same flattening as [`save`], for display.
///
/// # Errors
///
/// Propagates write failures.
pub fn render(state: &GameState, destination: impl Write) -> io::Result<()> {
    save(state, destination)
}
