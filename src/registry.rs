use crate::{Light, Pad, PadKey, Surface};
use std::collections::HashMap;
use std::time::Duration;

/// The last-known state of every pad that was ever written, together with the surface the writes
/// go to.
///
/// Games never talk to the surface directly: every write goes through [`PadRegistry::set`], which
/// records the pad and emits exactly one surface command. Reading the registry back is how the
/// games find out what a pad currently shows.
///
/// Surface writes are fire-and-forget. A failed write is logged and otherwise ignored.
pub struct PadRegistry {
    surface: Box<dyn Surface + Send>,
    pads: HashMap<PadKey, Pad>,
}

impl PadRegistry {
    pub fn new(surface: impl Surface + Send + 'static) -> Self {
        Self {
            surface: Box::new(surface),
            pads: HashMap::new(),
        }
    }

    /// Store `pad` and light it (`Light::On`) or turn it off (`Light::Off`). Pads turned off are
    /// stored with color 0.
    pub fn set(&mut self, pad: Pad, light: Light) {
        let result = match light {
            Light::On => {
                self.pads.insert(pad.key(), pad);
                self.surface.set_pad(pad.position, pad.color, pad.light_mode)
            }
            Light::Off => {
                self.pads.insert(pad.key(), Pad::off(pad.position));
                self.surface.clear_pad(pad.position)
            }
        };

        if let Err(e) = result {
            log::warn!("Dropped write to pad {:?}: {}", pad.position, e);
        }
    }

    /// The last stored state for `key`, or an unlit default if the pad was never written
    pub fn get(&self, key: PadKey) -> Pad {
        match self.pads.get(&key) {
            Some(pad) => *pad,
            None => Pad::off(key.position()),
        }
    }

    /// Turn every pad off with a single surface command
    pub fn clear_all(&mut self) {
        for pad in self.pads.values_mut() {
            *pad = Pad::off(pad.position);
        }

        if let Err(e) = self.surface.clear_all() {
            log::warn!("Dropped clear of the whole surface: {}", e);
        }
    }

    /// Pause between two animation frames
    pub fn hold(&mut self, duration: Duration) {
        self.surface.hold(duration);
    }

    /// Number of pads the registry has seen so far
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}
