//! WASM bindings for isolation-core
//!
//! Provides a JavaScript-friendly API for the game logic: a grid front end
//! maps a clicked cell to (row, col) and calls [`WasmGame::apply_move`].

use wasm_bindgen::prelude::*;

use crate::{Cell, Game, GameConfig, Player, Pos};

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game on the standard 8x6 board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            inner: Game::default(),
        }
    }

    /// Create a game on a custom board. Returns null for sizes with no
    /// valid standard setup (e.g. 1x1).
    #[wasm_bindgen(js_name = withSize)]
    pub fn with_size(width: u8, height: u8) -> Option<WasmGame> {
        Game::new(GameConfig::sized(width, height))
            .ok()
            .map(|inner| WasmGame { inner })
    }

    /// Board width in columns
    pub fn width(&self) -> u8 {
        self.inner.width()
    }

    /// Board height in rows
    pub fn height(&self) -> u8 {
        self.inner.height()
    }

    /// Current player (1 = White, 2 = Black)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        player_code(self.inner.current_player())
    }

    /// Current player's position as [row, col]
    #[wasm_bindgen(js_name = currentPosition)]
    pub fn current_position(&self) -> Vec<u8> {
        let pos = self.inner.current_player_position();
        vec![pos.row, pos.col]
    }

    /// Cell state at (row, col): 0 empty, 1 blocked, 2 White king,
    /// 3 Black king. Returns 255 for off-board coordinates.
    #[wasm_bindgen(js_name = cellAt)]
    pub fn cell_at(&self, row: u8, col: u8) -> u8 {
        match self.inner.cell_at(Pos::new(row, col)) {
            Ok(Cell::Empty) => 0,
            Ok(Cell::Blocked) => 1,
            Ok(Cell::Occupied(player)) => 1 + player_code(player),
            Err(_) => 255,
        }
    }

    /// Move the current player's king to (row, col). Returns true if the
    /// move was legal and applied.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: u8, col: u8) -> bool {
        self.inner.make_move(Pos::new(row, col))
    }

    /// Legal destinations for the current player as a JSON array of
    /// { row, col } objects
    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.legal_destinations()).unwrap()
    }

    /// Check if the game is over (current player has no legal move)
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_terminal()
    }

    /// Winner: 0 (game ongoing), 1 (White), or 2 (Black)
    pub fn winner(&self) -> u8 {
        match self.inner.winner() {
            None => 0,
            Some(player) => player_code(player),
        }
    }

    /// Text rendering of the board (W/B kings, X blocked, O empty)
    #[wasm_bindgen(js_name = displayString)]
    pub fn display_string(&self) -> String {
        self.inner.to_string()
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame {
            inner: self.inner.clone(),
        }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn player_code(player: Player) -> u8 {
    match player {
        Player::White => 1,
        Player::Black => 2,
    }
}
