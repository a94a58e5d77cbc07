/// A pad position on the Launchpad Mini MK3 in programmer layout.
///
/// Rows and columns are 1-indexed, with row 1 at the bottom and column 1 on the left. Row 9 is
/// the top control row and column 9 the right-hand control column; everything in `1..=8` on both
/// axes belongs to the 8x8 playing grid.
///
/// ```rust
/// # use padgames::PadPosition;
/// let pad = PadPosition::new(3, 6);
/// assert_eq!(pad.key().id(), 36);
/// assert!(pad.is_grid());
/// assert!(PadPosition::new(1, 9).is_control());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadPosition {
    pub row: u8,
    pub col: u8,
}

impl PadPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The scalar identity of this position, `row * 10 + col`. Both coordinates must be in
    /// `0..=9`.
    pub fn key(self) -> PadKey {
        PadKey::from(self)
    }

    pub fn kind(self) -> PadKind {
        if (1..=8).contains(&self.row) && (1..=8).contains(&self.col) {
            PadKind::Grid
        } else {
            PadKind::Control
        }
    }

    /// Returns true if the pad is part of the main 8x8 grid
    pub fn is_grid(self) -> bool {
        self.kind() == PadKind::Grid
    }

    /// Returns true if the pad is a side or top control pad
    pub fn is_control(self) -> bool {
        self.kind() == PadKind::Control
    }

    /// Iterates all 64 positions of the playing grid, bottom row first
    pub fn grid() -> impl Iterator<Item = PadPosition> {
        (1..=8).flat_map(|row| (1..=8).map(move |col| PadPosition { row, col }))
    }
}

/// Whether a pad belongs to the playing grid or to the control row/column. Grid pads are
/// addressed with note messages, control pads with control changes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum PadKind {
    Grid,
    Control,
}

/// The mapping key of a pad; identical to the note (or CC) number the Mini MK3 uses for it in
/// programmer mode.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadKey(u8);

impl PadKey {
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn position(self) -> PadPosition {
        PadPosition {
            row: self.0 / 10,
            col: self.0 % 10,
        }
    }
}

impl From<PadPosition> for PadKey {
    fn from(position: PadPosition) -> Self {
        debug_assert!(
            position.row <= 9 && position.col <= 9,
            "pad coordinates out of range: {:?}",
            position
        );
        Self(position.row.wrapping_mul(10).wrapping_add(position.col))
    }
}

impl From<PadKey> for PadPosition {
    fn from(key: PadKey) -> Self {
        key.position()
    }
}

/// How a lit pad behaves. The discriminant is the MIDI channel used to send the color.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightMode {
    /// A straight consistent light
    Permanent = 0,
    /// A flashing motion On->Off->On->Off->...
    Blinking = 1,
    /// A smooth pulse
    Pulsing = 2,
}

impl Default for LightMode {
    fn default() -> Self {
        LightMode::Permanent
    }
}

/// Whether a write to the registry turns the pad on or off
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Light {
    On,
    Off,
}

/// The last-known state of a single pad.
///
/// `color` is a palette index. Values above 127 can be stored (the color changer passes through
/// 128 before wrapping) but only the low seven bits reach the device.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pad {
    pub position: PadPosition,
    pub color: u8,
    pub light_mode: LightMode,
}

impl Pad {
    pub fn new(position: PadPosition, color: u8, light_mode: LightMode) -> Self {
        Self {
            position,
            color,
            light_mode,
        }
    }

    /// A steadily lit pad
    pub fn permanent(position: PadPosition, color: u8) -> Self {
        Self::new(position, color, LightMode::Permanent)
    }

    /// A pulsing pad
    pub fn pulsing(position: PadPosition, color: u8) -> Self {
        Self::new(position, color, LightMode::Pulsing)
    }

    /// The state a pad is stored as after being turned off
    pub fn off(position: PadPosition) -> Self {
        Self::new(position, 0, LightMode::Permanent)
    }

    pub fn key(&self) -> PadKey {
        self.position.key()
    }
}

/// Palette colors used by the games. See the "Launchpad MK3 Programmers Reference Manual" for the
/// full palette.
pub mod palette {
    pub const WHITE: u8 = 3;
    pub const RED: u8 = 5;
    pub const ORANGE: u8 = 9;
    pub const YELLOW: u8 = 13;
    pub const LIME_GREEN: u8 = 17;
    pub const GREEN: u8 = 21;
    pub const BLUE: u8 = 45;
    pub const PURPLE: u8 = 49;
    pub const PINK: u8 = 57;
    pub const CYAN: u8 = 90;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_decodes_back_to_position() {
        for row in 0..=9 {
            for col in 0..=9 {
                let position = PadPosition::new(row, col);
                assert_eq!(position.key().position(), position);
                assert_eq!(PadKey::new(position.key().id()).position(), position);
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pad coordinates out of range")]
    fn key_rejects_rows_past_the_control_row() {
        PadPosition::new(26, 0).key();
    }

    #[test]
    fn keys_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for row in 0..=9 {
            for col in 0..=9 {
                assert!(seen.insert(PadPosition::new(row, col).key()));
            }
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn ninth_row_and_column_are_control() {
        assert!(PadPosition::new(1, 9).is_control());
        assert!(PadPosition::new(9, 4).is_control());
        assert!(PadPosition::new(9, 9).is_control());
        assert!(PadPosition::new(8, 8).is_grid());
        assert!(PadPosition::new(1, 1).is_grid());
    }

    #[test]
    fn grid_has_64_pads() {
        assert_eq!(PadPosition::grid().count(), 64);
        assert!(PadPosition::grid().all(PadPosition::is_grid));
    }
}
