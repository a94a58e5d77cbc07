use crate::PadPosition;
use std::time::Duration;

/// Runtime knobs of the games and the device connection.
///
/// The defaults match a Launchpad Mini MK3 in programmer mode. The binary overrides individual
/// fields from its command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Pressing this control pad switches to the next game
    pub switch_pad: PadPosition,
    /// Time between two frames of the scrolling intro text
    pub scroll_interval: Duration,
    /// Duration of each on and off phase of the win flash
    pub flash_interval: Duration,
    /// How often the win flash alternates between the winner's color and off
    pub flash_count: u8,
    /// Text scrolled across the grid when tic-tac-toe starts
    pub intro_title: String,
    /// Substring identifying the device's MIDI output port
    pub output_port_keyword: String,
    /// Substring identifying the device's MIDI input port
    pub input_port_keyword: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            switch_pad: PadPosition::new(1, 9),
            scroll_interval: Duration::from_millis(90),
            flash_interval: Duration::from_millis(250),
            flash_count: 4,
            intro_title: String::from("TIC TAC TOE"),
            // On Linux the Mini MK3 shows up as "LPMiniMK3 MIDI In"/"LPMiniMK3 MIDI Out", on
            // MacOS as "Launchpad Mini MK3 LPMiniMK3 MIDI". Both contain the keyword.
            output_port_keyword: String::from("LPMiniMK3 MIDI"),
            input_port_keyword: String::from("LPMiniMK3 MIDI"),
        }
    }
}
