//! The LED surface abstraction.
//!
//! Everything the games draw ends up as one of three primitive writes on a [`Surface`]. The real
//! device is implemented in [`crate::mini_mk3`]; [`MockSurface`] keeps everything in memory so
//! the games can be exercised without hardware.

mod mock;
pub use mock::*;

use crate::{LightMode, PadPosition};
use std::time::Duration;

/// An inbound event from the device
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum PadEvent {
    /// A pad was pressed. A velocity of 0 is how some devices report a release.
    Pressed { position: PadPosition, velocity: u8 },
    /// A pad was released
    Released { position: PadPosition },
}

impl PadEvent {
    pub fn position(&self) -> PadPosition {
        match *self {
            Self::Pressed { position, .. } => position,
            Self::Released { position } => position,
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(*self, Self::Pressed { velocity, .. } if velocity > 0)
    }
}

pub trait Surface {
    /// Light one pad with a palette `color` in the given `mode`
    fn set_pad(
        &mut self,
        position: PadPosition,
        color: u8,
        mode: LightMode,
    ) -> Result<(), crate::MidiError>;

    /// Turn a single pad off
    fn clear_pad(&mut self, position: PadPosition) -> Result<(), crate::MidiError>;

    /// Turn every pad off, including the control row and column
    fn clear_all(&mut self) -> Result<(), crate::MidiError>;

    /// Wait between two animation frames. Devices just sleep; test surfaces may record the
    /// duration and return immediately.
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
