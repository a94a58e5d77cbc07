use crate::ok_or_continue;
use midir::{MidiIO, MidiInput, MidiInputConnection, MidiOutput, MidiOutputConnection};

/// Find the first port whose name contains `keyword`
fn guess_port<T: MidiIO>(midi_io: &T, keyword: &str) -> Result<T::Port, crate::MidiError> {
    let mut available = vec![];
    for port in midi_io.ports() {
        let name = ok_or_continue!(midi_io.port_name(&port));

        if name.contains(keyword) {
            log::debug!("Using MIDI port {:?}", name);
            return Ok(port);
        }
        available.push(name);
    }

    Err(crate::MidiError::NoPortFound {
        keyword: keyword.to_owned(),
        available,
    })
}

/// Connect to the first output port matching `keyword`
pub fn connect_output(keyword: &str) -> Result<MidiOutputConnection, crate::MidiError> {
    let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;
    let port = guess_port(&midi_output, keyword)?;

    Ok(midi_output.connect(&port, "padgames output")?)
}

/// Keeps the input connection open. Dropping it stops the callbacks.
pub struct InputHandler {
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
}

/// Connect to the first input port matching `keyword` and call `user_callback` with every
/// message that decodes to a pad event. The callback runs on the MIDI backend's thread.
#[must_use = "If not saved, the connection will be immediately dropped"]
pub fn listen<F>(keyword: &str, mut user_callback: F) -> Result<InputHandler, crate::MidiError>
where
    F: FnMut(crate::PadEvent) + Send + 'static,
{
    let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;
    let port = guess_port(&midi_input, keyword)?;

    let midir_callback = move |_timestamp: u64, data: &[u8], _: &mut ()| {
        if let Some(event) = crate::mini_mk3::decode_message(data) {
            log::trace!("{:?}", event);
            (user_callback)(event);
        }
    };

    let connection = midi_input.connect(&port, "padgames input", midir_callback, ())?;

    Ok(InputHandler { connection })
}
