/*!
# Tic-tac-toe with a short memory

The 8x8 grid is split into a 3x3 board of 2x2 cells by two yellow separator lines in each
direction. Players alternate placing marks. Only the last seven marks stay on the board: placing
an eighth removes the oldest mark first, so a board-full draw never happens.

Three marks in a row, column or diagonal win. The whole grid then flashes in the winner's color
and stays lit until the next press, which starts a new round.
*/

mod board;
pub use board::*;

pub mod glyphs;

use super::Game;
use crate::{palette, Light, Pad, PadPosition, PadRegistry, Settings};
use std::collections::VecDeque;
use std::time::Duration;

/// Upper bound on the number of marks on the board
pub const MAX_MOVES: usize = 7;

const SEPARATOR_COLOR: u8 = palette::YELLOW;
const TITLE_COLOR: u8 = palette::ORANGE;

/// A placed mark, remembered so the oldest one can be evicted
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Move {
    pub cell: Cell,
    pub player: Player,
}

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Phase {
    Playing,
    GameOver { winner: Player },
}

#[derive(Debug)]
pub struct TicTacToe {
    board: Board,
    current_player: Player,
    history: VecDeque<Move>,
    phase: Phase,

    title: String,
    scroll_interval: Duration,
    flash_interval: Duration,
    flash_count: u8,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl TicTacToe {
    pub fn new(settings: &Settings) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            history: VecDeque::with_capacity(MAX_MOVES),
            phase: Phase::Playing,

            title: settings.intro_title.clone(),
            scroll_interval: settings.scroll_interval,
            flash_interval: settings.flash_interval,
            flash_count: settings.flash_count,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::Playing => None,
        }
    }

    /// The marks on the board, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter()
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::One;
        self.history.clear();
        self.phase = Phase::Playing;
    }

    fn draw_separators(&self, registry: &mut PadRegistry) {
        for position in separator_pads() {
            registry.set(Pad::permanent(position, SEPARATOR_COLOR), Light::On);
        }
    }

    fn draw_cell(&self, registry: &mut PadRegistry, cell: Cell, owner: Option<Player>) {
        for &position in cell_pads(cell).iter() {
            match owner {
                Some(player) => registry.set(Pad::pulsing(position, player.color()), Light::On),
                None => registry.set(Pad::off(position), Light::Off),
            }
        }
    }

    fn fill_grid(&self, registry: &mut PadRegistry, color: u8) {
        for position in PadPosition::grid() {
            registry.set(Pad::permanent(position, color), Light::On);
        }
    }

    fn evict_oldest(&mut self, registry: &mut PadRegistry) {
        if let Some(oldest) = self.history.pop_front() {
            log::debug!("Tic-tac-toe: evicting {:?}", oldest);
            self.board.set(oldest.cell, None);
            self.draw_cell(registry, oldest.cell, None);
            self.draw_separators(registry);
        }
    }

    fn play_win_animation(&self, registry: &mut PadRegistry, winner: Player) {
        for _ in 0..self.flash_count {
            self.fill_grid(registry, winner.color());
            registry.hold(self.flash_interval);
            registry.clear_all();
            registry.hold(self.flash_interval);
        }
        self.fill_grid(registry, winner.color());
    }
}

impl Game for TicTacToe {
    fn name(&self) -> &str {
        "Tic-Tac-Toe"
    }

    fn start(&mut self, registry: &mut PadRegistry) {
        self.reset();

        registry.clear_all();
        glyphs::scroll_text(registry, &self.title, TITLE_COLOR, self.scroll_interval);
        registry.clear_all();
        self.draw_separators(registry);
    }

    fn handle_pad_press(&mut self, position: PadPosition, registry: &mut PadRegistry) {
        if self.is_game_over() {
            self.start(registry);
            return;
        }

        let cell = match cell_at(position) {
            Some(cell) => cell,
            None => {
                log::debug!("Tic-tac-toe: {:?} is not on the board", position);
                return;
            }
        };
        if self.board.is_occupied(cell) {
            return;
        }

        if self.history.len() >= MAX_MOVES {
            self.evict_oldest(registry);
        }

        let player = self.current_player;
        self.history.push_back(Move { cell, player });
        self.board.set(cell, Some(player));
        self.draw_cell(registry, cell, Some(player));

        if self.board.check_winner(player) {
            log::info!("Tic-tac-toe: player {} wins", player as u8);
            self.phase = Phase::GameOver { winner: player };
            self.play_win_animation(registry, player);
            return;
        }

        self.current_player = player.other();
    }
}
