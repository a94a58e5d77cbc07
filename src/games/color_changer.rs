use super::Game;
use crate::{Light, Pad, PadPosition, PadRegistry};

/// Each press moves the pad four steps further through the palette, wrapping back to black once
/// the end is passed. The colors live in the registry only.
#[derive(Debug, Default)]
pub struct ColorChanger;

impl ColorChanger {
    const STEP: u8 = 4;

    pub fn new() -> Self {
        Self
    }

    fn next_color(current: u8) -> u8 {
        if current < 128 {
            current + Self::STEP
        } else {
            0
        }
    }
}

impl Game for ColorChanger {
    fn name(&self) -> &str {
        "Color Changer"
    }

    fn start(&mut self, registry: &mut PadRegistry) {
        registry.clear_all();
    }

    fn handle_pad_press(&mut self, position: PadPosition, registry: &mut PadRegistry) {
        let current = registry.get(position.key());
        let color = Self::next_color(current.color);

        log::debug!("Color changer: {:?} {} -> {}", position, current.color, color);
        registry.set(Pad::permanent(position, color), Light::On);
    }
}
