use midir::MidiOutputConnection;

use crate::{LightMode, PadKind, PadPosition, Surface};

/// Switches the device into programmer layout. Has to be sent before any pad is lit.
pub const PROGRAMMER_MODE: [u8; 9] = [240, 0, 32, 41, 2, 13, 14, 1, 247];

/// Header of the SysEx message that sets multiple LEDs in one go
const LED_SYSEX_HEADER: [u8; 7] = [240, 0, 32, 41, 2, 13, 3];

/// Encode a single pad write. The light mode is the channel; color is reduced to a MIDI data byte.
///
/// ```rust
/// # use padgames::{mini_mk3, LightMode, PadPosition};
/// let bytes = mini_mk3::encode_set_pad(PadPosition::new(1, 1), 53, LightMode::Pulsing);
/// assert_eq!(bytes, [0x92, 11, 53]);
/// ```
pub fn encode_set_pad(position: PadPosition, color: u8, mode: LightMode) -> [u8; 3] {
    let type_byte = match position.kind() {
        PadKind::Grid => 0x90,
        PadKind::Control => 0xB0,
    } + mode as u8;

    [type_byte, position.key().id(), color & 0x7F]
}

/// Encode turning a pad off: note off for grid pads, a zero control change for control pads
pub fn encode_clear_pad(position: PadPosition) -> [u8; 3] {
    match position.kind() {
        PadKind::Grid => [0x80, position.key().id(), 0],
        PadKind::Control => [0xB0, position.key().id(), 0],
    }
}

/// Encode a SysEx message setting every LED, including control pads and the logo, to black
pub fn encode_clear_all() -> Vec<u8> {
    let mut buffer = LED_SYSEX_HEADER.to_vec();

    for row in 1..10 {
        for column in 1..10 {
            // Palette color type, LED index, color
            buffer.extend([0, row * 10 + column, 0]);
        }
    }

    buffer.push(247);
    buffer
}

/// The object handling any messages _to_ the Launchpad. The connection gets closed when this
/// object goes out of scope.
pub struct Output {
    connection: MidiOutputConnection,
}

impl Output {
    /// Take over an open connection and switch the device to programmer layout
    pub fn from_connection(connection: MidiOutputConnection) -> Result<Self, crate::MidiError> {
        let mut self_ = Self { connection };
        self_.send(&PROGRAMMER_MODE)?;
        Ok(self_)
    }

    /// Connect to the first output port whose name contains `keyword`
    pub fn guess(keyword: &str) -> Result<Self, crate::MidiError> {
        Self::from_connection(crate::connect_output(keyword)?)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), crate::MidiError> {
        self.connection.send(bytes)?;
        Ok(())
    }
}

impl Surface for Output {
    fn set_pad(
        &mut self,
        position: PadPosition,
        color: u8,
        mode: LightMode,
    ) -> Result<(), crate::MidiError> {
        self.send(&encode_set_pad(position, color, mode))
    }

    fn clear_pad(&mut self, position: PadPosition) -> Result<(), crate::MidiError> {
        self.send(&encode_clear_pad(position))
    }

    fn clear_all(&mut self) -> Result<(), crate::MidiError> {
        self.send(&encode_clear_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PadPosition::new(1, 1), 5, LightMode::Permanent, [0x90, 11, 5])]
    #[case(PadPosition::new(8, 8), 45, LightMode::Blinking, [0x91, 88, 45])]
    #[case(PadPosition::new(4, 6), 13, LightMode::Pulsing, [0x92, 46, 13])]
    #[case(PadPosition::new(1, 9), 21, LightMode::Permanent, [0xB0, 19, 21])]
    #[case(PadPosition::new(9, 2), 21, LightMode::Pulsing, [0xB2, 92, 21])]
    #[case(PadPosition::new(2, 2), 128, LightMode::Permanent, [0x90, 22, 0])]
    fn encodes_pad_writes(
        #[case] position: PadPosition,
        #[case] color: u8,
        #[case] mode: LightMode,
        #[case] expected: [u8; 3],
    ) {
        assert_eq!(encode_set_pad(position, color, mode), expected);
    }

    #[test]
    fn clears_grid_with_note_off_and_controls_with_cc() {
        assert_eq!(encode_clear_pad(PadPosition::new(3, 4)), [0x80, 34, 0]);
        assert_eq!(encode_clear_pad(PadPosition::new(5, 9)), [0xB0, 59, 0]);
    }

    #[test]
    fn clear_all_addresses_all_81_leds() {
        let bytes = encode_clear_all();

        assert_eq!(&bytes[..7], &LED_SYSEX_HEADER);
        assert_eq!(bytes.len(), 7 + 81 * 3 + 1);
        assert_eq!(bytes.last(), Some(&247));
        assert!(bytes[7..bytes.len() - 1]
            .chunks(3)
            .all(|chunk| chunk[0] == 0 && chunk[2] == 0));
    }
}
