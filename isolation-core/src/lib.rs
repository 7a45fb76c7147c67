//! Two-king isolation game logic.
//!
//! Each player controls a single king on a rectangular grid. A king moves
//! one square in any of the 8 compass directions onto an empty square; the
//! square it leaves is blocked for the rest of the game. The player whose
//! king has no empty neighbor to step onto loses.
//!
//! # Board Layout
//!
//! Cells are stored row-major in a flat vector, indexed `row * width + col`.
//! The default board is 8 wide by 6 high with the kings starting on opposite
//! edges:
//!
//! ```text
//!   O O O O O O O O
//!   O O O O O O O O
//!   W O O O O O O O
//!   O O O O O O O B
//!   O O O O O O O O
//!   O O O O O O O O
//! ```
//!
//! `W`/`B` mark the kings, `X` a blocked square, `O` an empty one. The same
//! tokens are used by the [`Display`](std::fmt::Display) rendering of
//! [`Game`].
//!
//! The core is single-threaded and performs no locking; callers sharing one
//! [`Game`] across threads must serialize access themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
pub mod wasm;

/// Default board width (columns).
pub const DEFAULT_WIDTH: u8 = 8;
/// Default board height (rows).
pub const DEFAULT_HEIGHT: u8 = 6;

/// Player identifier. White moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Single-letter marker used in board renderings.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// State of a single board square.
///
/// A `Blocked` square never becomes `Empty` or `Occupied` again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Blocked,
    Occupied(Player),
}

/// A 0-indexed (row, col) board coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }

    /// Check whether `other` is exactly one king step away
    /// (Chebyshev distance 1).
    #[inline]
    pub fn king_adjacent(self, other: Pos) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr.max(dc) == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Errors surfaced by [`Game`] construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A coordinate outside the grid was passed to a query. Never clamped.
    #[error("position {pos} is outside the {width}x{height} board")]
    OutOfBounds { pos: Pos, width: u8, height: u8 },
    /// A move that fails the adjacency/emptiness rule. Recoverable; the
    /// game state is untouched and the caller may retry.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Pos, to: Pos },
    /// Malformed initial setup. Fatal at construction time.
    #[error("invalid starting configuration: {0}")]
    InvalidConfiguration(String),
}

/// Initial setup for a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub white_start: Pos,
    pub black_start: Pos,
}

impl GameConfig {
    /// Setup for a `width` x `height` board with the kings on the standard
    /// squares: White on the left edge, Black on the right edge, both as
    /// close to the vertical middle as the height allows.
    pub fn sized(width: u8, height: u8) -> GameConfig {
        GameConfig {
            width,
            height,
            white_start: Pos::new(height.saturating_sub(1) / 2, 0),
            black_start: Pos::new(height / 2, width.saturating_sub(1)),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::sized(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// The full game state: board contents, king positions, and whose turn it is.
///
/// This is the single source of truth a presentation layer drives. The only
/// mutating operation is [`Game::try_move`] (and its boolean wrapper
/// [`Game::make_move`]); everything else is a pure read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    width: u8,
    height: u8,
    board: Vec<Cell>,
    white: Pos,
    black: Pos,
    turn: Player,
}

/// King move offsets, row-major around the origin.
const KING_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Game {
    /// Create a game from the given setup.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] if a dimension is
    /// zero, a starting square lies off the board, or the two starting
    /// squares coincide.
    pub fn new(config: GameConfig) -> Result<Game, GameError> {
        let GameConfig {
            width,
            height,
            white_start,
            black_start,
        } = config;

        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board must be at least 1x1, got {width}x{height}"
            )));
        }
        let on_board = |p: Pos| p.row < height && p.col < width;
        if !on_board(white_start) || !on_board(black_start) {
            return Err(GameError::InvalidConfiguration(format!(
                "starting squares {white_start} and {black_start} must lie on the {width}x{height} board"
            )));
        }
        if white_start == black_start {
            return Err(GameError::InvalidConfiguration(format!(
                "both kings start on {white_start}"
            )));
        }

        let mut game = Game {
            width,
            height,
            board: vec![Cell::Empty; width as usize * height as usize],
            white: white_start,
            black: black_start,
            turn: Player::White,
        };
        game.set_cell(white_start, Cell::Occupied(Player::White));
        game.set_cell(black_start, Cell::Occupied(Player::Black));
        Ok(game)
    }

    /// Board width (columns).
    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Board height (rows).
    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if a position lies on the board.
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.width as usize + pos.col as usize
    }

    /// Read a cell, assuming the position is on the board.
    #[inline]
    fn cell(&self, pos: Pos) -> Cell {
        self.board[self.index(pos)]
    }

    #[inline]
    fn set_cell(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.board[idx] = cell;
    }

    /// Read the cell at `pos`, or [`GameError::OutOfBounds`] if `pos` lies
    /// off the board.
    pub fn cell_at(&self, pos: Pos) -> Result<Cell, GameError> {
        if !self.in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cell(pos))
    }

    /// The player about to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// The current player's king position.
    #[inline]
    pub fn current_player_position(&self) -> Pos {
        self.position_of(self.turn)
    }

    /// A given player's king position.
    #[inline]
    pub fn position_of(&self, player: Player) -> Pos {
        match player {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    /// Check whether stepping from `from` to `to` is a legal king move:
    /// `to` on the board, empty, and exactly one king step from `from`.
    ///
    /// Position-agnostic: `from` need not be the current player's square,
    /// which lets callers validate arbitrary pairs.
    pub fn is_legal_move(&self, from: Pos, to: Pos) -> bool {
        self.in_bounds(from)
            && self.in_bounds(to)
            && from.king_adjacent(to)
            && self.cell(to) == Cell::Empty
    }

    /// In-bounds king neighbors of `pos`.
    fn king_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        KING_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row as i16 + dr;
            let col = pos.col as i16 + dc;
            let on_board =
                row >= 0 && row < self.height as i16 && col >= 0 && col < self.width as i16;
            on_board.then(|| Pos::new(row as u8, col as u8))
        })
    }

    /// All squares the current player may legally move to.
    pub fn legal_destinations(&self) -> Vec<Pos> {
        let from = self.current_player_position();
        self.king_neighbors(from)
            .filter(|&to| self.cell(to) == Cell::Empty)
            .collect()
    }

    /// Move the current player's king to `to`.
    ///
    /// On success the destination becomes occupied, the vacated square is
    /// blocked permanently, and the turn passes to the opponent. On
    /// [`GameError::IllegalMove`] nothing changes and the caller may retry
    /// with a different square, any number of times.
    ///
    /// Once the game is terminal every destination fails the emptiness or
    /// adjacency rule, so calling this after the end is a guaranteed no-op
    /// reported as `IllegalMove`.
    pub fn try_move(&mut self, to: Pos) -> Result<(), GameError> {
        let from = self.current_player_position();
        if !self.is_legal_move(from, to) {
            return Err(GameError::IllegalMove { from, to });
        }
        self.set_cell(from, Cell::Blocked);
        self.set_cell(to, Cell::Occupied(self.turn));
        match self.turn {
            Player::White => self.white = to,
            Player::Black => self.black = to,
        }
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Boolean wrapper around [`Game::try_move`] for retry loops.
    #[inline]
    pub fn make_move(&mut self, to: Pos) -> bool {
        self.try_move(to).is_ok()
    }

    /// True when the current player has no legal move, i.e. every in-bounds
    /// king neighbor of their square is blocked or occupied. The current
    /// player is then the loser.
    ///
    /// The core never halts itself; presentation layers must run this after
    /// every successful move and stop issuing moves once it returns true.
    pub fn is_terminal(&self) -> bool {
        let from = self.current_player_position();
        !self
            .king_neighbors(from)
            .any(|to| self.cell(to) == Cell::Empty)
    }

    /// The winner, if the game is over. `None` while in progress.
    pub fn winner(&self) -> Option<Player> {
        self.is_terminal().then(|| self.turn.opponent())
    }
}

impl Default for Game {
    /// The standard 8x6 game.
    fn default() -> Self {
        Game::new(GameConfig::default()).expect("default configuration is valid")
    }
}

impl fmt::Display for Game {
    /// Render the board, one row per line top to bottom, cells
    /// space-separated: the owner's marker for a king, `X` blocked,
    /// `O` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                let token = match self.cell(Pos::new(row, col)) {
                    Cell::Empty => 'O',
                    Cell::Blocked => 'X',
                    Cell::Occupied(player) => player.marker(),
                };
                write!(f, "{token}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
