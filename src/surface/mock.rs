use super::Surface;
use crate::{LightMode, PadPosition};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// A single write that reached a [`MockSurface`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    SetPad {
        position: PadPosition,
        color: u8,
        mode: LightMode,
    },
    ClearPad {
        position: PadPosition,
    },
    ClearAll,
    Hold(Duration),
}

#[derive(Default)]
struct MockState {
    commands: Vec<SurfaceCommand>,
    lit: HashMap<PadPosition, (u8, LightMode)>,
    failing: bool,
}

/// An in-memory surface that records every command and tracks which pads are currently lit.
///
/// Clones share the same state, so a test can hand one clone to a [`crate::PadRegistry`] and
/// inspect the other. [`Surface::hold`] returns immediately.
#[derive(Clone, Default)]
pub struct MockSurface {
    state: Arc<Mutex<MockState>>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All commands received so far, oldest first
    pub fn commands(&self) -> Vec<SurfaceCommand> {
        self.state().commands.clone()
    }

    /// Returns the recorded commands and forgets them. The lit state is kept.
    pub fn take_commands(&self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.state().commands)
    }

    /// Color and mode of a lit pad, or `None` if the pad is off
    pub fn lit(&self, position: PadPosition) -> Option<(u8, LightMode)> {
        self.state().lit.get(&position).copied()
    }

    /// Number of pads that are currently lit
    pub fn lit_count(&self) -> usize {
        self.state().lit.len()
    }

    /// While failing, every write returns an error and leaves the recorded state untouched
    pub fn set_failing(&self, failing: bool) {
        self.state().failing = failing;
    }

    /// Sum of all durations passed to [`Surface::hold`]
    pub fn held_for(&self) -> Duration {
        self.state()
            .commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Hold(duration) => Some(*duration),
                _ => None,
            })
            .sum()
    }
}

fn refuse_if_failing(state: &MockState) -> Result<(), crate::MidiError> {
    if state.failing {
        Err(crate::MidiError::SendError(midir::SendError::Other(
            "mock surface is failing",
        )))
    } else {
        Ok(())
    }
}

impl Surface for MockSurface {
    fn set_pad(
        &mut self,
        position: PadPosition,
        color: u8,
        mode: LightMode,
    ) -> Result<(), crate::MidiError> {
        let mut state = self.state();
        refuse_if_failing(&state)?;
        state.commands.push(SurfaceCommand::SetPad {
            position,
            color,
            mode,
        });
        state.lit.insert(position, (color, mode));
        Ok(())
    }

    fn clear_pad(&mut self, position: PadPosition) -> Result<(), crate::MidiError> {
        let mut state = self.state();
        refuse_if_failing(&state)?;
        state.commands.push(SurfaceCommand::ClearPad { position });
        state.lit.remove(&position);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), crate::MidiError> {
        let mut state = self.state();
        refuse_if_failing(&state)?;
        state.commands.push(SurfaceCommand::ClearAll);
        state.lit.clear();
        Ok(())
    }

    fn hold(&mut self, duration: Duration) {
        self.state().commands.push(SurfaceCommand::Hold(duration));
    }
}
