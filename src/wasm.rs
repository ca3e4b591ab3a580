//! WebAssembly entry points. Boards and moves cross the boundary as the records in
//! [`crate::codec`]; a board arrives as a `Map` or a plain object from square number to square
//! record.
//! Failures are thrown as strings.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::moves::Move;
use crate::types::Player;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Legal moves for `player` on `board`.
#[wasm_bindgen(js_name = availableMoves)]
pub fn available_moves(board: JsValue, player: JsValue) -> Result<JsValue, JsValue> {
    let board: Board = from_js(board)?;
    let player: Player = from_js(player)?;
    to_js(&board.available_moves(player))
}

/// Board after `mv`. The move is validated against the rules but not against the turn order.
#[wasm_bindgen(js_name = applyMove)]
pub fn apply_move(board: JsValue, mv: JsValue) -> Result<JsValue, JsValue> {
    let board: Board = from_js(board)?;
    let mv: Move = from_js(mv)?;
    let next = mv
        .apply(&board)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    to_js(&next)
}

/// Outcome token for the side to move, or `undefined` while play continues.
#[wasm_bindgen(js_name = checkGameOver)]
pub fn check_game_over(board: JsValue, turn: JsValue) -> Result<JsValue, JsValue> {
    let board: Board = from_js(board)?;
    let turn: Player = from_js(turn)?;
    to_js(&board.check_game_over(turn))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
