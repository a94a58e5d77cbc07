use super::Game;
use crate::{palette, Light, LightMode, Pad, PadPosition, PadRegistry};

/// The colors a painter can choose from. Only the first eight fit on the swatch column.
pub const PAINT_PALETTE: [u8; 10] = [
    palette::RED,
    palette::ORANGE,
    palette::YELLOW,
    palette::GREEN,
    palette::CYAN,
    palette::BLUE,
    palette::PURPLE,
    palette::PINK,
    palette::WHITE,
    palette::LIME_GREEN,
];

/// Column 1 shows the palette as swatches; the selected swatch pulses. Every other grid pad is
/// canvas and takes the selected color when pressed.
#[derive(Debug)]
pub struct PixelPaint {
    selected: usize,
    palette: [u8; 10],
}

impl Default for PixelPaint {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelPaint {
    const SWATCH_COLUMN: u8 = 1;
    const SWATCH_COUNT: u8 = 8;

    pub fn new() -> Self {
        Self {
            selected: 0,
            palette: PAINT_PALETTE,
        }
    }

    /// Index of the selected palette entry
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The color the next paint stroke will use
    pub fn current_color(&self) -> u8 {
        self.palette[self.selected]
    }

    fn swatch_index(position: PadPosition) -> Option<usize> {
        if position.col == Self::SWATCH_COLUMN && (1..=Self::SWATCH_COUNT).contains(&position.row) {
            Some(position.row as usize - 1)
        } else {
            None
        }
    }

    fn render_swatches(&self, registry: &mut PadRegistry) {
        for (index, &color) in self.palette.iter().take(Self::SWATCH_COUNT as usize).enumerate() {
            let position = PadPosition::new(index as u8 + 1, Self::SWATCH_COLUMN);
            let mode = if index == self.selected {
                LightMode::Pulsing
            } else {
                LightMode::Permanent
            };
            registry.set(Pad::new(position, color, mode), Light::On);
        }
    }
}

impl Game for PixelPaint {
    fn name(&self) -> &str {
        "Pixel Paint"
    }

    fn start(&mut self, registry: &mut PadRegistry) {
        self.render_swatches(registry);
    }

    fn handle_pad_press(&mut self, position: PadPosition, registry: &mut PadRegistry) {
        match Self::swatch_index(position) {
            Some(index) => {
                if index < self.palette.len() {
                    self.selected = index;
                    log::debug!("Pixel paint: selected color {}", self.current_color());
                    self.render_swatches(registry);
                }
            }
            None => {
                registry.set(Pad::permanent(position, self.current_color()), Light::On);
            }
        }
    }
}
