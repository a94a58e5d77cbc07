//! The built-in games.
//!
//! A game only ever sees pad presses on the 8x8 grid; control pads are handled by the
//! [`GameManager`](crate::GameManager) before they get here. All drawing goes through the
//! [`PadRegistry`] the game is handed.

mod color_changer;
pub use color_changer::*;

mod pixel_paint;
pub use pixel_paint::*;

pub mod tic_tac_toe;
pub use tic_tac_toe::TicTacToe;

use crate::{PadPosition, PadRegistry};

pub trait Game {
    /// Human readable name, used for logging
    fn name(&self) -> &str;

    /// Called when the manager switches to this game. The surface may still show whatever was on
    /// it before.
    fn start(&mut self, registry: &mut PadRegistry);

    /// Called when the manager switches away from this game
    fn stop(&mut self, _registry: &mut PadRegistry) {}

    /// Called for every press on the playing grid while this game is active
    fn handle_pad_press(&mut self, position: PadPosition, registry: &mut PadRegistry);
}
