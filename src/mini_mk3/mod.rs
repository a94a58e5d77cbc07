/*!
# Launchpad Mini MK3 adapter

The Mini MK3 has a 9x9 grid of 81 buttons. In programmer mode every pad is addressed by
`row * 10 + col`, row 1 being the bottom row: the 8x8 grid uses notes 11 to 88, the right-hand
column is 19 to 89 and the top row 91 to 98 (99 is the logo LED). Grid pads talk note on/off,
the control row and column talk control change.

The light mode is encoded in the MIDI channel: channel 1 lights steadily, channel 2 flashes and
channel 3 pulses.
*/

mod input;
pub use input::*;

mod output;
pub use output::*;
