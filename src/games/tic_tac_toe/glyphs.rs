//! A tiny 3x5 pixel font and the scrolling text animation built on it.

use crate::{Light, Pad, PadPosition, PadRegistry};
use std::time::Duration;

/// Five rows, top first. Each row uses the lower three bits, the highest of them being the
/// leftmost pixel.
pub type Glyph = [u8; 5];

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;

/// The pads the viewport is made of, left to right
const VIEWPORT_WIDTH: usize = 8;
/// Physical row of the top glyph row. The text is vertically centered on the grid.
const TOP_ROW: u8 = 7;

pub fn glyph(c: char) -> Option<Glyph> {
    let glyph = match c.to_ascii_uppercase() {
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        _ => return None,
    };
    Some(glyph)
}

/// Lays `text` out as pixel columns, left to right, with one empty column after every glyph.
/// Characters without a glyph are skipped.
pub fn text_columns(text: &str) -> Vec<[bool; GLYPH_HEIGHT]> {
    let mut columns = vec![];
    for glyph in text.chars().filter_map(glyph) {
        for x in 0..GLYPH_WIDTH {
            let shift = GLYPH_WIDTH - 1 - x;
            let mut column = [false; GLYPH_HEIGHT];
            for (y, bits) in glyph.iter().enumerate() {
                column[y] = (*bits >> shift) & 1 == 1;
            }
            columns.push(column);
        }
        columns.push([false; GLYPH_HEIGHT]);
    }
    columns
}

/// Scrolls `text` from right to left through the 8 pad wide viewport until it has left the grid
/// again. Only pads that change between two frames are written.
pub fn scroll_text(registry: &mut PadRegistry, text: &str, color: u8, interval: Duration) {
    let columns = text_columns(text);
    if columns.is_empty() {
        return;
    }

    for offset in 0..=(columns.len() + VIEWPORT_WIDTH) {
        for x in 0..VIEWPORT_WIDTH {
            // The text enters on the right edge
            let column = (offset + x)
                .checked_sub(VIEWPORT_WIDTH)
                .and_then(|index| columns.get(index));

            for y in 0..GLYPH_HEIGHT {
                let position = PadPosition::new(TOP_ROW - y as u8, x as u8 + 1);
                let wanted = column.map_or(false, |column| column[y]);
                let shown = registry.get(position.key()).color == color;

                if wanted && !shown {
                    registry.set(Pad::permanent(position, color), Light::On);
                } else if !wanted && shown {
                    registry.set(Pad::off(position), Light::Off);
                }
            }
        }
        registry.hold(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockSurface;

    #[test]
    fn undefined_characters_are_skipped() {
        assert_eq!(text_columns("T~T").len(), text_columns("TT").len());
        assert!(glyph('~').is_none());
    }

    #[test]
    fn every_glyph_is_followed_by_a_gap() {
        let columns = text_columns("TI");
        assert_eq!(columns.len(), 2 * (GLYPH_WIDTH + 1));
        assert_eq!(columns[3], [false; GLYPH_HEIGHT]);
        assert_eq!(columns[7], [false; GLYPH_HEIGHT]);
    }

    #[test]
    fn columns_follow_the_bitmap() {
        let columns = text_columns("T");
        assert_eq!(columns[0], [true, false, false, false, false]);
        assert_eq!(columns[1], [true, true, true, true, true]);
        assert_eq!(columns[2], [true, false, false, false, false]);
    }

    #[test]
    fn lowercase_uses_the_uppercase_glyph() {
        assert_eq!(glyph('t'), glyph('T'));
    }

    #[test]
    fn scroll_leaves_the_grid_dark() {
        let surface = MockSurface::new();
        let mut registry = PadRegistry::new(surface.clone());

        scroll_text(&mut registry, "TIC TAC TOE", 9, Duration::from_millis(10));

        assert_eq!(surface.lit_count(), 0);
        assert!(surface.commands().len() > 40);
        // 11 glyphs of 4 columns, 8 frames to leave the viewport and the final dark frame
        assert_eq!(surface.held_for(), Duration::from_millis(10) * (44 + 8 + 1));
    }

    #[test]
    fn scroll_of_nothing_draws_nothing() {
        let surface = MockSurface::new();
        let mut registry = PadRegistry::new(surface.clone());

        scroll_text(&mut registry, "~~", 9, Duration::from_millis(10));

        assert!(surface.commands().is_empty());
    }
}
