use crate::{PadEvent, PadKey, PadPosition};

const NOTE_ON: u8 = 0x90;
const NOTE_OFF: u8 = 0x80;
const CONTROL_CHANGE: u8 = 0xB0;

/// What the device answers after [`super::PROGRAMMER_MODE`] was sent
const PROGRAMMER_MODE_ACK: [u8; 9] = [240, 0, 32, 41, 2, 13, 14, 1, 247];

fn decode_position(key: u8) -> Option<PadPosition> {
    let position = PadKey::new(key).position();
    if (1..=9).contains(&position.row) && (1..=9).contains(&position.col) {
        Some(position)
    } else {
        None
    }
}

fn decode_press(key: u8, velocity: u8) -> Option<PadEvent> {
    let position = decode_position(key)?;
    Some(match velocity {
        0 => PadEvent::Released { position },
        velocity => PadEvent::Pressed { position, velocity },
    })
}

/// Decode a raw message from the Mini MK3 into a pad event. Anything that isn't a press or
/// release of a known pad yields `None`.
pub fn decode_message(data: &[u8]) -> Option<PadEvent> {
    match *data {
        // Grid press. Velocity 0 is a release
        [NOTE_ON, key, velocity] => decode_press(key, velocity),
        [NOTE_OFF, key, _] => decode_position(key).map(|position| PadEvent::Released { position }),
        // Control row and column press & release
        [CONTROL_CHANGE, key, velocity] => decode_press(key, velocity),
        _ if data == PROGRAMMER_MODE_ACK => {
            log::info!("Programmer mode successfully enabled");
            None
        }
        _ => {
            log::trace!("Ignoring MIDI message {:?}", data);
            None
        }
    }
}
