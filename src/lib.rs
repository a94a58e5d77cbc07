/*!
Small games for the Novation Launchpad Mini MK3.

The 8x8 grid of RGB pads turns into a color changer, a pixel painting canvas or a tic-tac-toe
board. The bottom pad of the right-hand control column cycles through the games.

# Architecture

Everything the games draw goes through a [`PadRegistry`], which remembers the last state of
every pad and forwards each write to a [`Surface`]. The real device is [`mini_mk3::Output`];
tests use [`MockSurface`]. Incoming MIDI is decoded into [`PadEvent`]s and handed to the
[`GameManager`], which routes them to the active [`games::Game`].

Events are handled one at a time. Animations (the scrolling intro, the win flash) run inline
while an event is handled, so presses made during an animation wait until it has finished.

```no_run
use padgames::games::{ColorChanger, PixelPaint, TicTacToe};
use padgames::{GameManager, PadRegistry, Settings};

let settings = Settings::default();
let output = padgames::mini_mk3::Output::guess(&settings.output_port_keyword)?;

let mut manager = GameManager::new(PadRegistry::new(output));
manager.add_game(ColorChanger::new());
manager.add_game(PixelPaint::new());
manager.add_game(TicTacToe::new(&settings));
manager.registry_mut().clear_all();
manager.start_current();

let (sender, receiver) = std::sync::mpsc::channel();
let _input = padgames::listen(&settings.input_port_keyword, move |event| {
    let _ = sender.send(event);
})?;

for event in receiver.iter() {
    manager.handle_event(event);
}
# Ok::<(), padgames::MidiError>(())
```
*/

pub mod util;

mod pad;
pub use pad::*;

mod surface;
pub use surface::*;

mod registry;
pub use registry::*;

mod manager;
pub use manager::*;

mod settings;
pub use settings::*;

pub mod games;

mod midi_io;
pub use midi_io::*;

mod errors;
pub use errors::*;

pub mod mini_mk3;

pub mod prelude {
    pub use crate::games::Game;
    pub use crate::pad::{Light, LightMode, Pad, PadPosition};
    pub use crate::registry::PadRegistry;
    pub use crate::surface::Surface;
}

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "padgames";
